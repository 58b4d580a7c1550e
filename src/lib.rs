#![forbid(unsafe_code)]

//! Versioner: maintain the version number stored in a VERSION file
//!
//! The version is either a SemVer version (`major.minor.patch[-label]`) or a
//! four part version (`major.minor.patch.revision`). Each invocation
//! initialises the file, increments one field, or sets the label.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod version;
pub mod version_file;

// Re-export error types for convenient access
pub use error::{ConfigError, VersionError, VersionerError};

// Re-export core domain types for convenient access
pub use version::{Field, Scheme, Version};
pub use version_file::VersionFile;
