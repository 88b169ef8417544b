//! Application configuration resolved once at startup.
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file,
//! environment variables (`DATABASE_URL`), then command-line overrides.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use guessing_engine::GameRules;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Environment variable naming the credential database.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Top-level configuration.
///
/// ```toml
/// database_url = "guessing_game.db"
/// log_file = "guessing_game.log"
/// log_filter = "info"
///
/// [rules]
/// low = 1
/// high = 1000
/// max_attempts = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// SQLite database path (or `:memory:`).
    #[setters(into)]
    database_url: String,
    /// File receiving log output; the terminal belongs to the UI.
    #[setters(into)]
    log_file: PathBuf,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[setters(into)]
    log_filter: String,
    /// Guessing range and attempt budget.
    rules: GameRules,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "guessing_game.db".to_string(),
            log_file: PathBuf::from("guessing_game.log"),
            log_filter: "info".to_string(),
            rules: GameRules::default(),
        }
    }
}

/// Values supplied on the command line; `None` keeps the lower-precedence value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(strip_option, prefix = "with_")]
pub struct ConfigOverrides {
    /// Replacement database path.
    pub database_url: Option<String>,
    /// Replacement attempt budget.
    pub max_attempts: Option<u32>,
    /// Replacement log file.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(database_url = %config.database_url, "Config parsed");
        Ok(config)
    }

    /// Resolves the full configuration.
    ///
    /// A missing file at `path` falls back to defaults unless `required` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unreadable or invalid configuration.
    #[instrument(skip(path, overrides), fields(path = %path.display()))]
    pub fn resolve(
        path: &Path,
        required: bool,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else if required {
            return Err(ConfigError::new(format!(
                "Config file not found: {}",
                path.display()
            )));
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };

        config.apply_env_from(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        config.validate()?;

        info!(
            database_url = %config.database_url,
            max_attempts = config.rules.max_attempts(),
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Applies environment variables looked up through `lookup`.
    #[instrument(skip(self, lookup))]
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|v| !v.is_empty()) {
            debug!(database_url = %url, "Database URL from environment");
            self.database_url = url;
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.database_url {
            self.database_url = url;
        }
        if let Some(max_attempts) = overrides.max_attempts {
            self.rules = self.rules.with_max_attempts(max_attempts);
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }
    }

    /// Checks the resolved values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty database URL or invalid rules.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::new("database_url must not be empty".to_string()));
        }
        self.rules
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid rules: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
