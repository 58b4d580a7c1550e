//! Label command implementation

use crate::cli::Operation;
use crate::cli::common::{self, Settings};
use crate::error::VersionerError;
use crate::output::VersionChange;
use crate::version_file::VersionFile;
use std::path::Path;

/// Run the label command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: The stored version is malformed or is a four part version
/// - 2: The file is missing or could not be read or written
pub fn run_label(label: &str, settings: &Settings) -> i32 {
    match set_label(label, &settings.file) {
        Ok(change) => common::report(&change, settings),
        Err(e) => common::report_error(&e),
    }
}

/// Replace the label of the SemVer version stored at `path`
///
/// An empty label removes it.
pub fn set_label(label: &str, path: &Path) -> Result<VersionChange, VersionerError> {
    tracing::debug!(label, "setting version label");
    let (previous, current) = VersionFile::new(path).update(|version| version.with_label(label))?;

    Ok(VersionChange::updated(
        Operation::SetLabel(label.to_string()),
        path.to_path_buf(),
        previous,
        current,
    ))
}
