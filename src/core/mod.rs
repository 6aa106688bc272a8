pub mod fleet;
pub mod showcase;
