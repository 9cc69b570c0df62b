//! Catalog record types
//!
//! Plain serializable records for tools, their uploaded files, and change-log
//! entries. The authoritative stored form of every version field is the
//! original string; parsing happens on demand in the version engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational status of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Offline,
    Running,
    Maintenance,
}

/// A tool or platform listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Grouping key, e.g. "tool", "platform", "system". Untyped tools land in
    /// the configured fallback group.
    pub kind: Option<String>,
    pub icon_url: Option<String>,
    pub access_url: Option<String>,
    /// Declared current version; used as the resolution fallback when no
    /// uploaded file carries a valid version tag.
    pub current_version: Option<String>,
    pub owner: Option<String>,
    pub status: ToolStatus,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An uploaded file record attached to a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFile {
    pub id: u64,
    pub tool_id: u64,
    pub file_name: String,
    pub original_name: Option<String>,
    pub file_size: u64,
    pub file_type: Option<String>,
    /// Version tag supplied at upload time. Validated on the way in, but
    /// historical records may still carry malformed tags; resolution skips
    /// those.
    pub version: Option<String>,
    /// Target architecture, e.g. "linux_x64", "macos_arm64".
    pub architecture: Option<String>,
    pub download_count: u64,
    pub description: Option<String>,
    pub uploader: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Kind of change recorded in a change-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Added,
    Fixed,
    Improved,
    Removed,
}

/// A change-log entry for one tool version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeLog {
    pub id: u64,
    pub tool_id: u64,
    pub version: Option<String>,
    pub change_type: ChangeType,
    pub content: String,
    pub author: Option<String>,
    pub changed_at: DateTime<Utc>,
}

/// Tools grouped by kind, with a display name and count per group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolGroup {
    /// Grouping key the tools were bucketed under.
    pub kind: String,
    /// Human-readable group name from the grouping config.
    pub display_name: String,
    pub tools: Vec<Tool>,
    pub count: usize,
}
