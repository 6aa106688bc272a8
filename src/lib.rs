pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, OutputFormat};

pub use config::FleetConfig;
pub use core::fleet::{Fleet, RejectedEntry, VehicleSpec};
pub use domain::model::{BaseVehicle, Car, Motorcycle, Vehicle, VehicleKind};
pub use domain::ports::{EngineStart, StartMethod};
pub use utils::error::{Result, VehicleError};
