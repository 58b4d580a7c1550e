//! Integration tests for configuration parsing
//!
//! This module contains integration tests that verify:
//! - Config loading from fixture files
//! - Rejection of unknown keys and invalid values
//! - Discovery of versioner.toml in the working directory
//!
//! NOTE: Tests that change the current directory are marked `#[serial]`.

mod common;

use common::fixture_path;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use versioner::ConfigError;
use versioner::cli::common::load_config;
use versioner::config::{ColorOption, Config, OutputFormat};

// ============================================================================
// Config (versioner.toml) fixtures
// ============================================================================

#[test]
fn test_config_load_valid_minimal() {
    let config = Config::load(fixture_path("valid_minimal.toml")).unwrap();

    assert_eq!(config.version.file, PathBuf::from("VERSION"));
    assert_eq!(config.output.format, OutputFormat::Human);
    assert_eq!(config.output.color, ColorOption::Auto);
}

#[test]
fn test_config_load_valid_full() {
    let config = Config::load(fixture_path("valid_full.toml")).unwrap();

    assert_eq!(config.version.file, PathBuf::from("packaging/VERSION"));
    assert_eq!(config.output.format, OutputFormat::Jsonl);
    assert_eq!(config.output.color, ColorOption::Never);
}

#[test]
fn test_config_load_invalid_unknown_key() {
    let result = Config::load(fixture_path("invalid_unknown_key.toml"));
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_load_invalid_color() {
    let result = Config::load(fixture_path("invalid_color.toml"));
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_load_invalid_empty_file() {
    let result = Config::load(fixture_path("invalid_empty_file.toml"));
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_load_missing_fixture() {
    let result = Config::load(fixture_path("does_not_exist.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

// ============================================================================
// versioner.toml discovery in the working directory
// ============================================================================

/// Run `f` with the current directory set to a fresh temporary directory
fn in_temp_dir<F>(f: F)
where
    F: FnOnce(&TempDir),
{
    let temp_dir = TempDir::new().unwrap();
    let original_dir = std::env::current_dir().unwrap();

    std::env::set_current_dir(temp_dir.path()).unwrap();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(&temp_dir)));
    std::env::set_current_dir(&original_dir).unwrap();

    if let Err(err) = result {
        std::panic::resume_unwind(err);
    }
}

#[test]
#[serial]
fn test_load_config_without_file_uses_defaults() {
    in_temp_dir(|_| {
        let config = load_config(None).unwrap();
        assert_eq!(config, Config::default());
    });
}

#[test]
#[serial]
fn test_load_config_discovers_versioner_toml() {
    in_temp_dir(|temp_dir| {
        fs::write(
            temp_dir.path().join("versioner.toml"),
            "[version]\nfile = \"RELEASE\"\n",
        )
        .unwrap();

        let config = load_config(None).unwrap();
        assert_eq!(config.version.file, PathBuf::from("RELEASE"));
    });
}

#[test]
#[serial]
fn test_load_config_reports_invalid_versioner_toml() {
    in_temp_dir(|temp_dir| {
        fs::write(temp_dir.path().join("versioner.toml"), "[version\n").unwrap();

        let result = load_config(None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    });
}
