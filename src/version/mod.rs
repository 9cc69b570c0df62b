//! Semantic version engine
//!
//! Parsing, validation, comparison, and resolution of version strings per
//! Semantic Versioning 2.0.0 precedence rules. Everything here is pure and
//! side-effect free; versions are parsed on demand from stored strings and
//! never written back.
//!
//! # Modules
//!
//! - [`grammar`]: version grammar validation and decomposition into [`Version`]
//! - [`compare`]: precedence ordering (`Ord` on [`Version`], [`compare_strings`])
//! - [`resolver`]: "latest" and "all sorted" resolution over candidate sets
//! - [`error`]: the engine's error type

pub mod compare;
pub mod error;
pub mod grammar;
pub mod resolver;

pub use compare::compare_strings;
pub use error::VersionError;
pub use grammar::{PreReleaseIdentifier, Version, is_valid};
