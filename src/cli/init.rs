//! Initialize the version file
//!
//! Creates the version file holding a zero version in the requested scheme.
//! An existing file is never overwritten.

use crate::cli::Operation;
use crate::cli::common::{self, Settings};
use crate::error::VersionerError;
use crate::output::VersionChange;
use crate::version::{Scheme, Version};
use crate::version_file::VersionFile;
use std::path::Path;

/// Run the init command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: The file already exists or could not be written
pub fn run_init(scheme: Scheme, settings: &Settings) -> i32 {
    match init_version(scheme, &settings.file) {
        Ok(change) => common::report(&change, settings),
        Err(e) => common::report_error(&e),
    }
}

/// Create the version file at `path` with a zero version
pub fn init_version(scheme: Scheme, path: &Path) -> Result<VersionChange, VersionerError> {
    let version = Version::new(scheme);
    VersionFile::new(path).create(&version)?;

    Ok(VersionChange::initialised(
        Operation::Init(scheme),
        path.to_path_buf(),
        version,
    ))
}
