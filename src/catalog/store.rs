//! Catalog store seam
//!
//! Persistence is an external collaborator's concern; the service only needs
//! read access to tools, their file records, and change-log entries. Real
//! deployments implement [`CatalogStore`] over their database; tests and
//! embedded use get [`MemoryCatalog`].

#[cfg(test)]
use mockall::automock;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{ChangeLog, Tool, ToolFile};

/// Read access to catalog records.
#[cfg_attr(test, automock)]
pub trait CatalogStore: Send + Sync {
    /// Look up a tool by its exact name.
    fn tool_by_name(&self, name: &str) -> Result<Option<Tool>, CatalogError>;

    /// All file records attached to a tool.
    fn files_for_tool(&self, tool_id: u64) -> Result<Vec<ToolFile>, CatalogError>;

    /// Every tool in the catalog, in no particular order.
    fn all_tools(&self) -> Result<Vec<Tool>, CatalogError>;

    /// Change-log entries for a tool, in no particular order.
    fn changelog_for_tool(&self, tool_id: u64) -> Result<Vec<ChangeLog>, CatalogError>;
}

/// In-memory store over plain vectors.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    tools: Vec<Tool>,
    files: Vec<ToolFile>,
    changelog: Vec<ChangeLog>,
}

impl MemoryCatalog {
    pub fn new(tools: Vec<Tool>, files: Vec<ToolFile>, changelog: Vec<ChangeLog>) -> Self {
        Self {
            tools,
            files,
            changelog,
        }
    }
}

impl CatalogStore for MemoryCatalog {
    fn tool_by_name(&self, name: &str) -> Result<Option<Tool>, CatalogError> {
        Ok(self.tools.iter().find(|t| t.name == name).cloned())
    }

    fn files_for_tool(&self, tool_id: u64) -> Result<Vec<ToolFile>, CatalogError> {
        Ok(self
            .files
            .iter()
            .filter(|f| f.tool_id == tool_id)
            .cloned()
            .collect())
    }

    fn all_tools(&self) -> Result<Vec<Tool>, CatalogError> {
        Ok(self.tools.clone())
    }

    fn changelog_for_tool(&self, tool_id: u64) -> Result<Vec<ChangeLog>, CatalogError> {
        Ok(self
            .changelog
            .iter()
            .filter(|c| c.tool_id == tool_id)
            .cloned()
            .collect())
    }
}
