//! Version precedence comparison
//!
//! Implements the SemVer 2.0.0 precedence rules as `Ord` on [`Version`]:
//!
//! 1. Compare major, minor, patch numerically; first difference decides.
//! 2. At an equal core triplet, a release outranks any pre-release.
//! 3. Pre-release fields compare identifier by identifier: numeric vs numeric
//!    numerically, alphanumeric vs alphanumeric in ASCII byte order, numeric
//!    below alphanumeric at the same position, and a shorter sequence below a
//!    longer one that it prefixes.
//! 4. Build metadata is never consulted.
//!
//! Equality and hashing also ignore build metadata so they stay consistent
//! with the ordering: `1.0.0+build.1` and `1.0.0+build.2` are equal.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::version::error::VersionError;
use crate::version::grammar::Version;

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.is_pre_release(), other.is_pre_release()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                // Vec ordering is lexicographic with shorter-prefix-first,
                // matching rule 3 exactly.
                (true, true) => self.pre_release.cmp(&other.pre_release),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse both strings and compare their precedence.
///
/// Fails with [`VersionError::Malformed`] if either input does not satisfy
/// the grammar. Callers that tolerate malformed input should go through the
/// resolver instead.
pub fn compare_strings(a: &str, b: &str) -> Result<Ordering, VersionError> {
    let a = Version::parse(a)?;
    let b = Version::parse(b)?;
    Ok(a.cmp(&b))
}
