#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per change:
//!
//! ```text
//! {"type":"version","operation":"increment-minor","file":"VERSION","previous":"1.2.3","current":"1.3.0"}
//! ```
//!
//! `previous` is `null` when the file was initialised.

use crate::output::VersionChange;
use crate::version::Version;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the change as a single JSON line, including the trailing newline
    pub fn format(&self, change: &VersionChange) -> serde_json::Result<String> {
        let record = VersionRecord {
            record_type: "version",
            operation: change.operation.to_string(),
            file: change.file.display().to_string(),
            previous: change.previous.as_ref(),
            current: &change.current,
        };

        let mut output = serde_json::to_string(&record)?;
        output.push('\n');
        Ok(output)
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct VersionRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    operation: String,
    file: String,
    previous: Option<&'a Version>,
    current: &'a Version,
}
