//! Semantic version engine and resolution core for an internal tool catalog.
//!
//! - [`version`]: SemVer 2.0.0 grammar, precedence comparison, and resolution
//! - [`catalog`]: catalog records and the read-side service consuming the engine
//! - [`config`]: catalog configuration

pub mod catalog;
pub mod config;
pub mod version;
