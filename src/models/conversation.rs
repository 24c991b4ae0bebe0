use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// Reference to a file attached to a message. Only the presence of
/// attachments matters to search, so the payload itself is not carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<Attachment>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), files: Vec::new() }
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

/// A chat conversation as owned by the chat subsystem.
///
/// The search core only ever reads conversations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Conversation {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), messages: Vec::new(), created_at: None }
    }

    /// Creation time of the conversation, if it can be determined.
    ///
    /// Prefers the explicit `created_at` field. Older clients minted ids from
    /// `Date.now()`, so an all-digit id is read as epoch milliseconds.
    pub fn created_at_or_legacy(&self) -> Option<DateTime<Utc>> {
        self.created_at.or_else(|| legacy_timestamp_from_id(&self.id))
    }
}

/// Parse a conversation id minted as epoch milliseconds
pub fn legacy_timestamp_from_id(id: &str) -> Option<DateTime<Utc>> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let millis: i64 = id.parse().ok()?;
    DateTime::from_timestamp_millis(millis)
}
