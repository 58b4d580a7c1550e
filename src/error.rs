//! Error types for versioner
//!
//! This module defines the error types used throughout versioner, following
//! a hierarchical structure: the pure version engine and the configuration
//! loader each have their own error enum, and `VersionerError` wraps them
//! together with the file-level failures of the CLI.

use crate::version::Field;
use std::path::PathBuf;

/// Errors produced by the version engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// The text does not match either supported version grammar
    #[error(
        "Malformed version '{input}': versions must be a 3 part SemVer (major.minor.patch or major.minor.patch-label) or a 4 part version (major.minor.patch.revision)"
    )]
    MalformedVersion { input: String },

    /// The requested mutation is not valid for the version's scheme
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Incrementing the field would exceed the largest representable value
    #[error("Cannot increment the {field} field any further")]
    FieldOverflow { field: Field },
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Top-level error type for versioner
#[derive(Debug, thiserror::Error)]
pub enum VersionerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Version engine error
    #[error("{0}")]
    Version(#[from] VersionError),

    /// Init was requested but the version file is already there
    #[error("Cannot initialise as {} already exists", .0.display())]
    AlreadyInitialized(PathBuf),

    /// A mutation was requested but there is no version file yet
    #[error(
        "{} not found. Run 'versioner --init semver' or 'versioner --init 4part' to create it.",
        .0.display()
    )]
    NotInitialized(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
