//! Configuration file parsing and validation

pub mod versioner_toml;

pub use versioner_toml::{
    ColorOption, Config, DEFAULT_CONFIG_FILE, DEFAULT_VERSION_FILE, OutputConfig, OutputFormat,
    VersionConfig,
};
