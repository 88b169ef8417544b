//! Guessing Game - terminal entry point.
//!
//! Resolves configuration, opens the credential store, and hands the
//! terminal to the login → rules → mode → game flow.

#![warn(missing_docs)]

mod cli;

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use guessing_game::{AppConfig, AuthController, FlowController, SqliteCredentialStore, tui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config_path, required) = cli.config_path();
    let config = AppConfig::resolve(&config_path, required, cli.overrides())?;

    init_logging(&config)?;
    run(config)
}

/// Logs to a file; stdout belongs to the terminal UI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip(config), fields(database_url = %config.database_url()))]
fn run(config: AppConfig) -> Result<()> {
    info!("Starting Guessing Game");

    let store = match SqliteCredentialStore::open(config.database_url()) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Failed to open credential store");
            return Err(e).context("Failed to open credential store");
        }
    };

    let mut controller = FlowController::with_entropy(AuthController::new(store), *config.rules())?;
    tui::run(&mut controller)?;

    info!("Goodbye");
    Ok(())
}
