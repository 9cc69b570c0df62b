//! Catalog operations over an injected store
//!
//! The service owns no state beyond its store handle and configuration; every
//! operation reads records on demand and feeds version strings through the
//! version engine.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::catalog::error::CatalogError;
use crate::catalog::store::CatalogStore;
use crate::catalog::types::{ChangeLog, Tool, ToolGroup};
use crate::config::CatalogConfig;
use crate::version::error::VersionError;
use crate::version::{is_valid, resolver};

/// Reject a version tag that does not satisfy the grammar.
///
/// Upload and edit handlers call this before accepting a record; stored
/// records are never re-validated on the read path.
pub fn validate_version_tag(tag: &str) -> Result<(), VersionError> {
    if is_valid(tag) {
        Ok(())
    } else {
        Err(VersionError::Malformed(tag.to_string()))
    }
}

/// Read-side catalog service.
pub struct CatalogService<S: CatalogStore> {
    store: S,
    config: CatalogConfig,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, CatalogConfig::default())
    }

    pub fn with_config(store: S, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// Resolve the latest version of a tool.
    ///
    /// Candidates are the version tags on the tool's uploaded files; the
    /// tool's declared current version is the fallback when no file carries a
    /// valid tag. A blank or unknown tool name resolves to `None`.
    pub fn resolve_latest_version(&self, tool_name: &str) -> Result<Option<String>, CatalogError> {
        let Some(tool) = self.lookup_tool(tool_name)? else {
            return Ok(None);
        };

        let candidates = self.file_versions(tool.id)?;
        let latest = resolver::latest(&candidates, tool.current_version.as_deref());
        info!(
            "resolved latest version for {tool_name:?}: {:?}",
            latest.as_deref()
        );
        Ok(latest)
    }

    /// Resolve every distinct version of a tool, highest precedence first.
    ///
    /// Same inputs as [`resolve_latest_version`](Self::resolve_latest_version);
    /// used to populate version-selector listings.
    pub fn resolve_all_versions(&self, tool_name: &str) -> Result<Vec<String>, CatalogError> {
        let Some(tool) = self.lookup_tool(tool_name)? else {
            return Ok(Vec::new());
        };

        let candidates = self.file_versions(tool.id)?;
        Ok(resolver::all_sorted(
            &candidates,
            tool.current_version.as_deref(),
        ))
    }

    /// All tools bucketed by kind, in first-seen kind order.
    ///
    /// Within a group, tools are ordered by `sort_order` ascending and then
    /// `created_at` descending. Untyped tools land in the configured fallback
    /// group.
    pub fn tools_by_group(&self) -> Result<Vec<ToolGroup>, CatalogError> {
        let mut tools = self.store.all_tools()?;
        tools.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        let mut groups: IndexMap<String, Vec<Tool>> = IndexMap::new();
        for tool in tools {
            let kind = match tool.kind.as_deref() {
                Some(kind) if !kind.trim().is_empty() => kind.to_string(),
                _ => self.config.grouping.fallback_kind.clone(),
            };
            groups.entry(kind).or_default().push(tool);
        }

        Ok(groups
            .into_iter()
            .map(|(kind, tools)| ToolGroup {
                display_name: self.config.grouping.display_name(&kind),
                count: tools.len(),
                kind,
                tools,
            })
            .collect())
    }

    /// Change-log entries for a tool, most recent change first.
    pub fn changelog(&self, tool_id: u64) -> Result<Vec<ChangeLog>, CatalogError> {
        let mut entries = self.store.changelog_for_tool(tool_id)?;
        entries.sort_by(|a, b| b.changed_at.cmp(&a.changed_at));
        Ok(entries)
    }

    fn lookup_tool(&self, tool_name: &str) -> Result<Option<Tool>, CatalogError> {
        if tool_name.trim().is_empty() {
            return Ok(None);
        }
        let tool = self.store.tool_by_name(tool_name)?;
        if tool.is_none() {
            debug!("no tool named {tool_name:?} in catalog");
        }
        Ok(tool)
    }

    fn file_versions(&self, tool_id: u64) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .store
            .files_for_tool(tool_id)?
            .into_iter()
            .filter_map(|file| file.version)
            .collect())
    }
}
