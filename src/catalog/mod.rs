//! Tool catalog layer
//!
//! The read-side surface the rest of the backend consumes: version resolution
//! per tool, grouped listings, and change-log lookups, all over an injected
//! [`CatalogStore`]. Transport, authentication, and persistence live outside
//! this crate.
//!
//! # Modules
//!
//! - [`types`]: plain catalog records ([`Tool`], [`ToolFile`], [`ChangeLog`])
//! - [`store`]: the store trait and an in-memory implementation
//! - [`service`]: catalog operations ([`CatalogService`])
//! - [`error`]: service-level errors

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::CatalogError;
pub use service::{CatalogService, validate_version_tag};
pub use store::{CatalogStore, MemoryCatalog};
pub use types::{ChangeLog, ChangeType, Tool, ToolFile, ToolGroup, ToolStatus};
