use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::conversation::{Message, Role};

/// Derived, rebuildable per-message record used for searching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub conversation_id: String,
    pub message_index: usize,
    pub lowercased_content: String,
    pub role: Role,
    pub has_files: bool,
    #[serde(default)]
    pub tag_names: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Character offset range `[start, end)` into the original message content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub conversation_id: String,
    pub conversation_title: String,
    pub message_index: usize,
    pub message: Message,
    pub snippet: String,
    /// Char index in the original content where the snippet window starts
    pub snippet_offset: usize,
    pub highlights: Vec<Highlight>,
    pub score: u32,
}
