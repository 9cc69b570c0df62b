use thiserror::Error;

use crate::version::VersionError;

/// Errors surfaced by the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store failed; the message comes from the store
    /// implementation.
    #[error("catalog store error: {0}")]
    Store(String),

    /// A version field failed validation.
    #[error(transparent)]
    Version(#[from] VersionError),
}
