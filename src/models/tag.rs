use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-defined label owning a set of conversation ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Member conversation ids in assignment order, without duplicates
    #[serde(default)]
    pub conversation_ids: Vec<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn contains(&self, conversation_id: &str) -> bool {
        self.conversation_ids.iter().any(|id| id == conversation_id)
    }
}
