//! Increment command implementation
//!
//! Bumps one field of the stored version. Less significant fields are reset
//! to zero and any label is dropped.

use crate::cli::Operation;
use crate::cli::common::{self, Settings};
use crate::error::VersionerError;
use crate::output::VersionChange;
use crate::version::Field;
use crate::version_file::VersionFile;
use std::path::Path;

/// Run the increment command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: The stored version is malformed or the field does not apply to it
/// - 2: The file is missing or could not be read or written
pub fn run_increment(field: Field, settings: &Settings) -> i32 {
    match increment_version(field, &settings.file) {
        Ok(change) => common::report(&change, settings),
        Err(e) => common::report_error(&e),
    }
}

/// Increment `field` of the version stored at `path`
pub fn increment_version(field: Field, path: &Path) -> Result<VersionChange, VersionerError> {
    tracing::debug!(%field, "incrementing version");
    let (previous, current) = VersionFile::new(path).update(|version| version.increment(field))?;

    Ok(VersionChange::updated(
        Operation::Increment(field),
        path.to_path_buf(),
        previous,
        current,
    ))
}
