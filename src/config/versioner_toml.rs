//! Parsing and validation for versioner.toml configuration files

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the file holding the version
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Default name of the optional project configuration file
pub const DEFAULT_CONFIG_FILE: &str = "versioner.toml";

/// Main configuration struct for versioner.toml
///
/// Every section is optional; a missing config file behaves like an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Version file settings
    #[serde(default)]
    pub version: VersionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.version.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "version.file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// `[version]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionConfig {
    /// Path of the version file, relative to the working directory
    #[serde(default = "default_version_file")]
    pub file: PathBuf,
}

fn default_version_file() -> PathBuf {
    PathBuf::from(DEFAULT_VERSION_FILE)
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            file: default_version_file(),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorOption> for termcolor::ColorChoice {
    fn from(option: ColorOption) -> Self {
        match option {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}
