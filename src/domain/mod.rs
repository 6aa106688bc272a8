// Domain layer: vehicle entities, the engine-start capability set and the validation rules.

pub mod model;
pub mod ports;
pub mod rules;
