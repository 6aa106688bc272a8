use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vehicle-lab")]
#[command(about = "Build, validate and inspect vehicles")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create one vehicle of each kind and print it
    Basic,
    /// Read every field through its accessor
    Getters,
    /// Walk a mixed list of vehicles
    Polymorphism,
    /// Show the rejected constructor inputs
    Validation,
    /// Try every engine start method on every kind
    Engines,
    /// Run every showcase in order
    All,
    /// Build a fleet from a TOML roster
    Fleet {
        #[arg(short, long, default_value = "fleet.toml")]
        config: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
