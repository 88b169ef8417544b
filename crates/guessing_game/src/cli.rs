//! Command-line interface for guessing_game.

use std::path::PathBuf;

use clap::Parser;
use guessing_game::ConfigOverrides;

/// Default configuration file, used only if it exists.
pub const DEFAULT_CONFIG: &str = "guessing_game.toml";

/// Guessing Game - guess the number after logging in
#[derive(Parser, Debug)]
#[command(name = "guessing_game")]
#[command(about = "Terminal number-guessing game with a login gate", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (required to exist when given)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SQLite database holding user accounts (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Attempt budget for Game mode
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Config path and whether it must exist.
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG), false),
        }
    }

    /// Command-line values that take precedence over file and environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            database_url: self.database_url.clone(),
            max_attempts: self.max_attempts,
            log_file: self.log_file.clone(),
        }
    }
}
