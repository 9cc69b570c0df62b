use thiserror::Error;

/// Errors raised by the version engine.
///
/// Only the direct parse/compare entry points raise this; the resolver treats
/// malformed input as absence, never as failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Input does not match the semantic version grammar.
    /// Carries the offending string as received.
    #[error("malformed semantic version: {0:?}")]
    Malformed(String),
}
