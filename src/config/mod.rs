#[cfg(feature = "cli")]
pub mod cli;
pub mod fleet_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, OutputFormat};
pub use fleet_config::FleetConfig;
