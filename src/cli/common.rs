//! Common helper functions shared across CLI commands
//!
//! This module resolves the effective settings from the command line and the
//! optional configuration file, reports results, and maps errors to exit
//! codes.

use crate::cli::Cli;
use crate::config::{ColorOption, Config, DEFAULT_CONFIG_FILE, OutputFormat};
use crate::error::{ConfigError, VersionerError};
use crate::output::{HumanFormatter, JsonlFormatter, VersionChange};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use termcolor::{ColorChoice, StandardStream};

pub const EXIT_SUCCESS: i32 = 0;
/// The version file holds a malformed version or the operation does not apply to it
pub const EXIT_VERSION_ERROR: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Effective settings for one invocation
///
/// Command line switches win over versioner.toml, which wins over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub color: ColorOption,
}

impl Settings {
    /// Load the configuration file and merge it with the command line
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let config = load_config(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &config))
    }

    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Settings {
            file: cli
                .file
                .clone()
                .unwrap_or_else(|| config.version.file.clone()),
            format: cli.format.unwrap_or(config.output.format),
            color: cli.color.unwrap_or(config.output.color),
        }
    }
}

/// Load versioner.toml configuration
///
/// An explicitly requested file must exist. The default file is optional and
/// its absence yields the default configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading configuration");
        return Config::load(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if !default_path.exists() {
        return Ok(Config::default());
    }

    tracing::debug!(path = %default_path.display(), "loading configuration");
    Config::load(default_path)
}

/// Exit code for a failed operation
pub fn exit_code(err: &VersionerError) -> i32 {
    match err {
        VersionerError::Version(_) => EXIT_VERSION_ERROR,
        _ => EXIT_ERROR,
    }
}

/// Print an error on stderr and return its exit code
pub fn report_error(err: &VersionerError) -> i32 {
    eprintln!("Error: {}", err);
    exit_code(err)
}

/// Print a successful change on stdout in the configured format
pub fn report(change: &VersionChange, settings: &Settings) -> i32 {
    let result = match settings.format {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(color_choice(settings.color));
            HumanFormatter::new().write(change, &mut stdout)
        }
        OutputFormat::Jsonl => {
            JsonlFormatter::new()
                .format(change)
                .map_err(std::io::Error::from)
                .and_then(|line| {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(line.as_bytes())?;
                    stdout.flush()
                })
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&VersionerError::Io(e)),
    }
}

/// Auto never colors output that is not going to a terminal
fn color_choice(option: ColorOption) -> ColorChoice {
    match option {
        ColorOption::Auto if !std::io::stdout().is_terminal() => ColorChoice::Never,
        other => other.into(),
    }
}
