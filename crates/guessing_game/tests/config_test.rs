//! Tests for configuration resolution.

use std::io::Write;
use std::path::{Path, PathBuf};

use guessing_game::{AppConfig, ConfigOverrides, DATABASE_URL_ENV};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Write failed");
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.database_url(), "guessing_game.db");
    assert_eq!(config.log_file(), Path::new("guessing_game.log"));
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.rules().low(), 1);
    assert_eq!(*config.rules().high(), 1000);
    assert_eq!(*config.rules().max_attempts(), 10);
}

#[test]
fn test_from_toml_partial_keeps_defaults() {
    let config = AppConfig::from_toml(
        r#"
        database_url = "users.db"

        [rules]
        max_attempts = 5
        "#,
    )
    .expect("Parse failed");
    assert_eq!(config.database_url(), "users.db");
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.rules().max_attempts(), 5);
    assert_eq!(*config.rules().high(), 1000);
}

#[test]
fn test_from_toml_rejects_garbage() {
    assert!(AppConfig::from_toml("database_url = [").is_err());
}

#[test]
fn test_env_overrides_file() {
    let mut config = AppConfig::default();
    config.apply_env_from(|key| (key == DATABASE_URL_ENV).then(|| "env.db".to_string()));
    assert_eq!(config.database_url(), "env.db");

    // An empty variable is ignored.
    config.apply_env_from(|_| Some(String::new()));
    assert_eq!(config.database_url(), "env.db");
}

#[test]
fn test_cli_overrides_win() {
    let mut config = AppConfig::default();
    config.apply_env_from(|_| Some("env.db".to_string()));
    config.apply_overrides(
        ConfigOverrides::default()
            .with_database_url("cli.db".to_string())
            .with_max_attempts(3)
            .with_log_file(PathBuf::from("cli.log")),
    );
    assert_eq!(config.database_url(), "cli.db");
    assert_eq!(*config.rules().max_attempts(), 3);
    assert_eq!(config.log_file(), Path::new("cli.log"));
}

#[test]
fn test_resolve_reads_file_and_applies_overrides() {
    let file = write_config("database_url = \"file.db\"\nlog_filter = \"debug\"\n");
    let config = AppConfig::resolve(
        file.path(),
        true,
        ConfigOverrides::default().with_max_attempts(7),
    )
    .expect("Resolve failed");
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.rules().max_attempts(), 7);
}

#[test]
fn test_resolve_missing_file() {
    let path = Path::new("definitely/not/here/guessing_game.toml");
    assert!(AppConfig::resolve(path, true, ConfigOverrides::default()).is_err());

    let config = AppConfig::resolve(path, false, ConfigOverrides::default())
        .expect("Optional file falls back to defaults");
    assert_eq!(*config.rules(), *AppConfig::default().rules());
}

#[test]
fn test_validate_rejects_bad_values() {
    let config = AppConfig::default().with_database_url("  ");
    assert!(config.validate().is_err());

    let file = write_config("[rules]\nlow = 10\nhigh = 1\n");
    let err = AppConfig::resolve(file.path(), true, ConfigOverrides::default())
        .expect_err("Empty range");
    assert!(err.message.contains("Invalid rules"));

    let zero = AppConfig::default().with_rules(AppConfig::default().rules().with_max_attempts(0));
    assert!(zero.validate().is_err());
}
