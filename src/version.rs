#![forbid(unsafe_code)]

//! Version values and their textual grammar
//!
//! A [`Version`] is an immutable value in one of two schemes:
//!
//! - [`Scheme::SemVer`]: `major.minor.patch` with an optional `-label`
//! - [`Scheme::FourPart`]: `major.minor.patch.revision`
//!
//! Every mutation returns a new value and leaves the receiver untouched.
//! Nothing in this module performs I/O.

use crate::error::VersionError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static FOUR_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
        .expect("four part pattern is valid")
});

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-(\S+))?$")
        .expect("semver pattern is valid")
});

/// The numbering scheme of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Three numeric fields plus an optional label
    SemVer,
    /// Four numeric fields, never labelled
    FourPart,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::SemVer => write!(f, "semver"),
            Scheme::FourPart => write!(f, "4part"),
        }
    }
}

/// A field of a version that can be incremented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// First field; resets everything after it
    Major,
    /// Second field; resets patch and revision
    Minor,
    /// Third field; resets the revision
    Patch,
    /// Fourth field, four part versions only
    Revision,
}

impl Field {
    /// All fields, most significant first
    pub const ALL: [Field; 4] = [Field::Major, Field::Minor, Field::Patch, Field::Revision];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::Revision => "revision",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Field {
    type Error = VersionError;

    /// Selects a field by significance, `0` being major
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Field::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| unknown_field(index))
    }
}

impl FromStr for Field {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| unknown_field(s))
    }
}

fn unknown_field(selector: impl fmt::Display) -> VersionError {
    VersionError::UnsupportedOperation(format!("increment field '{}' is unknown", selector))
}

/// A SemVer or four part version number
///
/// The fields are private so the scheme invariants hold for every value:
/// a four part version never has a label and a SemVer version never exposes
/// a revision. A label, when present, is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    scheme: Scheme,
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    label: Option<String>,
}

impl Version {
    /// Creates a zero version in the given scheme
    pub fn new(scheme: Scheme) -> Self {
        Version {
            scheme,
            major: 0,
            minor: 0,
            patch: 0,
            revision: 0,
            label: None,
        }
    }

    /// Creates `0.0.0`
    pub fn new_semver() -> Self {
        Self::new(Scheme::SemVer)
    }

    /// Creates `0.0.0.0`
    pub fn new_four_part() -> Self {
        Self::new(Scheme::FourPart)
    }

    /// Parses a version, detecting its scheme from the text
    ///
    /// The text must contain exactly two or three dots. Four dot-separated
    /// integers yield a four part version; three integers optionally
    /// followed by `-label` yield a SemVer version. Integers have no leading
    /// zeros, so every accepted text formats back to itself. Anything else,
    /// including trailing text after a complete match, is a
    /// [`VersionError::MalformedVersion`].
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::MalformedVersion {
            input: text.to_string(),
        };

        let separators = text.matches('.').count();
        if !(2..=3).contains(&separators) {
            return Err(malformed());
        }

        let number = |digits: &str| digits.parse::<u64>().map_err(|_| malformed());

        if let Some(caps) = FOUR_PART.captures(text) {
            return Ok(Version {
                scheme: Scheme::FourPart,
                major: number(&caps[1])?,
                minor: number(&caps[2])?,
                patch: number(&caps[3])?,
                revision: number(&caps[4])?,
                label: None,
            });
        }

        if let Some(caps) = SEMVER.captures(text) {
            return Ok(Version {
                scheme: Scheme::SemVer,
                major: number(&caps[1])?,
                minor: number(&caps[2])?,
                patch: number(&caps[3])?,
                revision: 0,
                label: caps.get(4).map(|m| m.as_str().to_string()),
            });
        }

        Err(malformed())
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The revision, `None` for SemVer versions
    pub fn revision(&self) -> Option<u64> {
        match self.scheme {
            Scheme::SemVer => None,
            Scheme::FourPart => Some(self.revision),
        }
    }

    /// The label, `None` when unlabelled (always `None` for four part versions)
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Increments a field, resetting every less significant field to zero
    ///
    /// Major, minor and patch increments also drop any label. Incrementing
    /// the revision is only supported on four part versions, since it is not
    /// clear what it would mean for a SemVer label.
    pub fn increment(&self, field: Field) -> Result<Self, VersionError> {
        let bump = |value: u64| {
            value
                .checked_add(1)
                .ok_or(VersionError::FieldOverflow { field })
        };

        let next = match field {
            Field::Major => Version {
                major: bump(self.major)?,
                ..Version::new(self.scheme)
            },
            Field::Minor => Version {
                major: self.major,
                minor: bump(self.minor)?,
                ..Version::new(self.scheme)
            },
            Field::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: bump(self.patch)?,
                ..Version::new(self.scheme)
            },
            Field::Revision => {
                if self.scheme == Scheme::SemVer {
                    return Err(VersionError::UnsupportedOperation(
                        "cannot increment the revision of a SemVer version as the meaning of its label is unclear"
                            .to_string(),
                    ));
                }
                Version {
                    revision: bump(self.revision)?,
                    ..self.clone()
                }
            }
        };

        Ok(next)
    }

    /// Replaces the label of a SemVer version
    ///
    /// An empty label clears it. Four part versions cannot carry a label,
    /// and a label that would not parse back (whitespace, or dots pushing the
    /// separator count past three) is rejected.
    pub fn with_label(&self, label: &str) -> Result<Self, VersionError> {
        if self.scheme == Scheme::FourPart {
            return Err(VersionError::UnsupportedOperation(
                "cannot set label on a four part version".to_string(),
            ));
        }

        let labelled = Version {
            label: (!label.is_empty()).then(|| label.to_string()),
            ..self.clone()
        };

        if Version::parse(&labelled.to_string()).as_ref() != Ok(&labelled) {
            return Err(VersionError::UnsupportedOperation(format!(
                "label '{}' would not produce a readable version",
                label
            )));
        }

        Ok(labelled)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match (self.scheme, &self.label) {
            (Scheme::FourPart, _) => write!(f, ".{}", self.revision),
            (Scheme::SemVer, Some(label)) => write!(f, "-{}", label),
            (Scheme::SemVer, None) => Ok(()),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
