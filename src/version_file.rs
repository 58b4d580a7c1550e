//! Reading and writing the file that holds the version
//!
//! The file contains exactly the formatted version and nothing else. It is
//! created once by init and afterwards rewritten in place by each mutation.

use crate::error::{VersionError, VersionerError};
use crate::version::Version;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Handle on the version file at a given path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file holding `version`
    ///
    /// Fails with [`VersionerError::AlreadyInitialized`] if the file exists;
    /// an existing file is never overwritten.
    pub fn create(&self, version: &Version) -> Result<(), VersionerError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => VersionerError::AlreadyInitialized(self.path.clone()),
                _ => VersionerError::Io(e),
            })?;
        file.write_all(version.to_string().as_bytes())?;
        tracing::debug!(path = %self.path.display(), %version, "created version file");
        Ok(())
    }

    /// Reads and parses the current version
    ///
    /// Trailing whitespace, such as the newline an editor appends, is ignored.
    /// Contents that are not UTF-8 are a malformed version.
    pub fn load(&self) -> Result<Version, VersionerError> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => VersionerError::NotInitialized(self.path.clone()),
            _ => VersionerError::Io(e),
        })?;
        let content = String::from_utf8(bytes).map_err(|e| VersionError::MalformedVersion {
            input: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })?;

        let text = content.trim_end();
        if text.len() != content.len() {
            tracing::warn!(
                path = %self.path.display(),
                "ignoring trailing whitespace in version file"
            );
        }

        let version = Version::parse(text)?;
        tracing::debug!(path = %self.path.display(), %version, "loaded version file");
        Ok(version)
    }

    /// Overwrites the file with `version`
    pub fn store(&self, version: &Version) -> Result<(), VersionerError> {
        fs::write(&self.path, version.to_string())?;
        tracing::debug!(path = %self.path.display(), %version, "wrote version file");
        Ok(())
    }

    /// Loads the version, applies `change` and stores the result
    ///
    /// The file is left untouched when loading or `change` fails. Returns the
    /// previous and the new version.
    pub fn update<F>(&self, change: F) -> Result<(Version, Version), VersionerError>
    where
        F: FnOnce(&Version) -> Result<Version, VersionError>,
    {
        let previous = self.load()?;
        let current = change(&previous)?;
        self.store(&current)?;
        Ok((previous, current))
    }
}
