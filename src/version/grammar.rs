//! Semantic version grammar
//!
//! Validates and decomposes version strings per Semantic Versioning 2.0.0
//! (https://semver.org/): `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
//!
//! Parsing always produces a fresh [`Version`]; the authoritative stored form
//! of a version remains the original string.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersionError;

/// The semver.org grammar: core triplet without leading zeros, optional
/// dot-separated pre-release identifiers (numeric ones without leading zeros),
/// optional alphanumeric/hyphen build identifiers.
static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("semver pattern compiles")
});

/// One dot-separated segment of a pre-release field.
///
/// Variant order matters: the derived `Ord` places `Numeric` below
/// `Alphanumeric`, which is exactly the SemVer rule for mixed-kind
/// identifiers at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseIdentifier {
    /// Digits only; compares numerically.
    Numeric(u64),
    /// Contains at least one non-digit; compares in ASCII byte order.
    Alphanumeric(String),
}

impl fmt::Display for PreReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseIdentifier::Numeric(n) => write!(f, "{n}"),
            PreReleaseIdentifier::Alphanumeric(s) => f.write_str(s),
        }
    }
}

/// A parsed semantic version.
///
/// Equality, ordering, and hashing ignore `build_metadata`; see the
/// [`compare`](crate::version::compare) module.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release identifiers in declaration order; empty for a release.
    pub pre_release: Vec<PreReleaseIdentifier>,
    /// Opaque build metadata, carried for display only.
    pub build_metadata: Option<String>,
}

impl Version {
    /// Create a release version with no pre-release or build parts.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: None,
        }
    }

    /// Whether this version carries a pre-release field.
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Parse a version string, trimming surrounding whitespace first.
    ///
    /// Returns [`VersionError::Malformed`] carrying the offending input when
    /// the string does not match the grammar.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::Malformed(input.to_string());

        let trimmed = input.trim();
        let captures = SEMVER_RE.captures(trimmed).ok_or_else(malformed)?;

        // The pattern guarantees digit sequences, but not that they fit u64.
        let part = |idx: usize| -> Result<u64, VersionError> {
            captures[idx].parse::<u64>().map_err(|_| malformed())
        };

        let pre_release = match captures.get(4) {
            Some(m) => m
                .as_str()
                .split('.')
                .map(parse_pre_release_identifier)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| malformed())?,
            None => Vec::new(),
        };

        Ok(Self {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3)?,
            pre_release,
            build_metadata: captures.get(5).map(|m| m.as_str().to_string()),
        })
    }
}

/// Classify a single pre-release identifier.
///
/// The surrounding regex has already rejected empty identifiers and leading
/// zeros; the only remaining failure is a numeric identifier exceeding u64.
fn parse_pre_release_identifier(s: &str) -> Result<PreReleaseIdentifier, VersionError> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse::<u64>()
            .map(PreReleaseIdentifier::Numeric)
            .map_err(|_| VersionError::Malformed(s.to_string()))
    } else {
        Ok(PreReleaseIdentifier::Alphanumeric(s.to_string()))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            let mut sep = '-';
            for id in &self.pre_release {
                write!(f, "{sep}{id}")?;
                sep = '.';
            }
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

/// Check whether a string satisfies the semantic version grammar.
///
/// Surrounding whitespace is trimmed before matching; empty or
/// whitespace-only input is invalid. This is the validation entry point used
/// to reject malformed version tags on records and uploads.
pub fn is_valid(version: &str) -> bool {
    let trimmed = version.trim();
    !trimmed.is_empty() && SEMVER_RE.is_match(trimmed)
}
