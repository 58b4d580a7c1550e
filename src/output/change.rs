//! The outcome of a single versioner invocation

use crate::cli::Operation;
use crate::version::Version;
use std::path::PathBuf;

/// A version file change made by one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    /// Operation that produced the change
    pub operation: Operation,
    /// Version file that was written
    pub file: PathBuf,
    /// Version before the operation, `None` when the file was initialised
    pub previous: Option<Version>,
    /// Version now stored in the file
    pub current: Version,
}

impl VersionChange {
    /// A change that created the version file
    pub fn initialised(operation: Operation, file: PathBuf, current: Version) -> Self {
        VersionChange {
            operation,
            file,
            previous: None,
            current,
        }
    }

    /// A change that rewrote an existing version file
    pub fn updated(operation: Operation, file: PathBuf, previous: Version, current: Version) -> Self {
        VersionChange {
            operation,
            file,
            previous: Some(previous),
            current,
        }
    }

    /// Whether the stored text is the same as before
    pub fn is_unchanged(&self) -> bool {
        self.previous.as_ref() == Some(&self.current)
    }
}
