mod commands;
mod logging;

use std::process;

use clap::Parser;
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use plex_cleaner_core::audit::{AuditLog, DEFAULT_DECISION_LOG};
use plex_cleaner_core::confirm::StdinConfirmation;
use plex_cleaner_core::plex::PlexServer;
use plex_cleaner_core::{AppConfig, CleanEngine};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match plex_cleaner_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        // No flags, no required subcommand: a bare invocation runs
        // the clean, driven entirely by configuration.
        Some(Commands::Clean) | None => {
            if let Err(err) = run_clean(&config) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
    }

    Ok(())
}

fn run_clean(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let scoring = config.scoring()?;

    let server = match PlexServer::connect(&config.server, &config.token) {
        Ok(server) => server,
        Err(err) => {
            error!(
                "Exception connecting to server {}: {}",
                config.server, err
            );
            println!("Exception connecting to {}", config.server);
            process::exit(1);
        }
    };

    println!("Initialized");
    println!("Finding items...");

    let audit = AuditLog::new(DEFAULT_DECISION_LOG);
    let confirm = StdinConfirmation::default();
    let engine = CleanEngine::new(
        &scoring,
        &config.libraries,
        &server,
        &server,
        &confirm,
        &audit,
    );
    let result = engine.run()?;

    println!();
    info!(
        "{} parts scored across {} sections, {} below minimum score",
        format!("{}", result.parts_scored).green(),
        format!("{}", result.sections_processed).green(),
        format!("{}", result.below_threshold).red(),
    );
    info!(
        "{} deleted, {} delete errors, {} skipped by user",
        format!("{}", result.deleted).red(),
        format!("{}", result.delete_errors).red(),
        format!("{}", result.skipped_by_user).cyan(),
    );
    println!("Your media server is now clean!");

    Ok(())
}
