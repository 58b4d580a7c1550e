#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Prints a single line describing the change, with the versions highlighted:
//!
//! ```text
//! Initialised VERSION at 0.0.0
//! Updated VERSION from 1.2.3 to 1.3.0
//! VERSION is already 1.2.3-rc1
//! ```

use crate::output::VersionChange;
use crate::version::Version;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human output formatter
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the change as one line of text
    pub fn write(&self, change: &VersionChange, out: &mut dyn WriteColor) -> io::Result<()> {
        let file = change.file.display();
        match &change.previous {
            None => {
                write!(out, "Initialised {} at ", file)?;
                write_version(out, &change.current, Color::Green)?;
            }
            Some(_) if change.is_unchanged() => {
                write!(out, "{} is already ", file)?;
                write_version(out, &change.current, Color::Green)?;
            }
            Some(previous) => {
                write!(out, "Updated {} from ", file)?;
                write_version(out, previous, Color::Yellow)?;
                write!(out, " to ")?;
                write_version(out, &change.current, Color::Green)?;
            }
        }
        writeln!(out)
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_version(out: &mut dyn WriteColor, version: &Version, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", version)?;
    out.reset()
}
