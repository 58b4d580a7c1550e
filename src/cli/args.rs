//! CLI argument parsing using clap

use crate::config::{ColorOption, OutputFormat};
use crate::version::{Field, Scheme};
use clap::{ArgGroup, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Version scheme accepted by `--init`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InitType {
    /// major.minor.patch with an optional -label
    Semver,
    /// major.minor.patch.revision
    #[value(name = "4part")]
    FourPart,
}

impl From<InitType> for Scheme {
    fn from(init_type: InitType) -> Self {
        match init_type {
            InitType::Semver => Scheme::SemVer,
            InitType::FourPart => Scheme::FourPart,
        }
    }
}

/// Versioner CLI main entry point
///
/// At most one of the operation switches may be given per invocation.
#[derive(Parser, Debug)]
#[command(name = "versioner")]
#[command(about = "Maintain the SemVer or four part version stored in a VERSION file")]
#[command(version)]
#[command(group(
    ArgGroup::new("operation")
        .args(["init", "major", "minor", "patch", "revision", "label"])
        .multiple(false)
))]
pub struct Cli {
    /// Initialise the version file
    #[arg(long, value_name = "TYPE")]
    pub init: Option<InitType>,

    /// Increment the major version
    #[arg(long)]
    pub major: bool,

    /// Increment the minor version
    #[arg(long)]
    pub minor: bool,

    /// Increment the patch version
    #[arg(long)]
    pub patch: bool,

    /// Increment the revision (four part versions only)
    #[arg(long)]
    pub revision: bool,

    /// Set the label of a SemVer version (an empty label removes it)
    #[arg(long, value_name = "LABEL")]
    pub label: Option<String>,

    /// Version file to operate on [default: VERSION]
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Configuration file [default: versioner.toml, if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output coloring
    #[arg(long)]
    pub color: Option<ColorOption>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The single operation selected on the command line, if any
    pub fn operation(&self) -> Option<Operation> {
        if let Some(init_type) = self.init {
            return Some(Operation::Init(init_type.into()));
        }

        let increments = [
            (self.major, Field::Major),
            (self.minor, Field::Minor),
            (self.patch, Field::Patch),
            (self.revision, Field::Revision),
        ];
        if let Some((_, field)) = increments.into_iter().find(|(selected, _)| *selected) {
            return Some(Operation::Increment(field));
        }

        self.label.clone().map(Operation::SetLabel)
    }
}

/// What a single invocation does to the version file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Create the file with a zero version
    Init(Scheme),
    /// Increment a field of the stored version
    Increment(Field),
    /// Replace the label of the stored SemVer version
    SetLabel(String),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Init(scheme) => write!(f, "init-{}", scheme),
            Operation::Increment(field) => write!(f, "increment-{}", field),
            Operation::SetLabel(_) => write!(f, "set-label"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_operation() {
        let cli = Cli::parse_from(["versioner"]);
        assert_eq!(cli.operation(), None);
        assert_eq!(cli.file, None);
        assert_eq!(cli.format, None);
        assert_eq!(cli.color, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_init_semver() {
        let cli = Cli::parse_from(["versioner", "--init", "semver"]);
        assert_eq!(cli.operation(), Some(Operation::Init(Scheme::SemVer)));
    }

    #[test]
    fn test_init_four_part() {
        let cli = Cli::parse_from(["versioner", "--init", "4part"]);
        assert_eq!(cli.operation(), Some(Operation::Init(Scheme::FourPart)));
    }

    #[test]
    fn test_init_unknown_type() {
        let result = Cli::try_parse_from(["versioner", "--init", "calver"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_increment_flags() {
        for (flag, field) in [
            ("--major", Field::Major),
            ("--minor", Field::Minor),
            ("--patch", Field::Patch),
            ("--revision", Field::Revision),
        ] {
            let cli = Cli::parse_from(["versioner", flag]);
            assert_eq!(cli.operation(), Some(Operation::Increment(field)));
        }
    }

    #[test]
    fn test_label() {
        let cli = Cli::parse_from(["versioner", "--label", "beta"]);
        assert_eq!(
            cli.operation(),
            Some(Operation::SetLabel("beta".to_string()))
        );

        let cli = Cli::parse_from(["versioner", "--label", ""]);
        assert_eq!(cli.operation(), Some(Operation::SetLabel(String::new())));
    }

    #[test]
    fn test_multiple_operations_conflict() {
        let result = Cli::try_parse_from(["versioner", "--major", "--minor"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["versioner", "--init", "semver", "--patch"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["versioner", "--revision", "--label", "rc1"]);
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("--revision") || err_msg.contains("--label"));
    }

    #[test]
    fn test_ambient_options() {
        let cli = Cli::parse_from([
            "versioner",
            "--patch",
            "--file",
            "build/VERSION",
            "--config",
            "ci.toml",
            "-f",
            "jsonl",
            "--color",
            "never",
            "-v",
        ]);
        assert_eq!(cli.operation(), Some(Operation::Increment(Field::Patch)));
        assert_eq!(cli.file, Some(PathBuf::from("build/VERSION")));
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert_eq!(cli.format, Some(OutputFormat::Jsonl));
        assert_eq!(cli.color, Some(ColorOption::Never));
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_format() {
        let result = Cli::try_parse_from(["versioner", "--major", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Init(Scheme::SemVer).to_string(), "init-semver");
        assert_eq!(Operation::Init(Scheme::FourPart).to_string(), "init-4part");
        assert_eq!(
            Operation::Increment(Field::Revision).to_string(),
            "increment-revision"
        );
        assert_eq!(
            Operation::SetLabel("x".to_string()).to_string(),
            "set-label"
        );
    }

    #[test]
    fn test_help_contains_about() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("VERSION file"));
        assert!(help.contains("--init"));
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["versioner", "--version"]);
        assert!(result.is_err());
    }
}
