use anyhow::Context;
use clap::Parser;
use std::io::Write;
use vehicle_lab::core::showcase;
use vehicle_lab::utils::error::ErrorCategory;
use vehicle_lab::utils::{logger, validation::Validate};
use vehicle_lab::{CliConfig, Command, FleetConfig, OutputFormat, VehicleError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting vehicle-lab");
    tracing::debug!("CLI config: {:?}", config);

    let lines = match run(&config.command) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依錯誤類別決定退出碼
            let exit_code = match e.category() {
                ErrorCategory::Validation | ErrorCategory::TypeMismatch => 1,
                ErrorCategory::Configuration => 2,
                ErrorCategory::System => 3,
            };
            std::process::exit(exit_code);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line).context("Failed to write output")?;
    }

    Ok(())
}

fn run(command: &Command) -> Result<Vec<String>, VehicleError> {
    match command {
        Command::Basic => showcase::basic_showcase(),
        Command::Getters => showcase::getters_showcase(),
        Command::Polymorphism => showcase::polymorphism_showcase(),
        Command::Validation => showcase::validation_showcase(),
        Command::Engines => showcase::engine_showcase(),
        Command::All => showcase::full_showcase(),
        Command::Fleet { config, format } => {
            tracing::info!("📁 Loading fleet from: {}", config.display());
            let fleet_config = FleetConfig::from_file(config)?;
            fleet_config.validate()?;

            let fleet = fleet_config.build_fleet();
            match format {
                OutputFormat::Text => Ok(fleet.render_text()),
                OutputFormat::Json => Ok(vec![fleet.to_json()?]),
            }
        }
    }
}
