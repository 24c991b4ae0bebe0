//! Data models for conversation search.
//!
//! - [`Conversation`] / [`Message`] - chat data owned by the chat subsystem (read-only here)
//! - [`IndexEntry`] - derived per-message record held by the search index
//! - [`SearchResult`] / [`Highlight`] - transient query output
//! - [`Tag`] - user-defined label with conversation membership
//!
//! All models serialize with camelCase field names so persisted blobs stay
//! readable by the web client that produced them.

pub mod conversation;
pub mod search;
pub mod tag;

pub use conversation::{Attachment, Conversation, Message, Role, legacy_timestamp_from_id};
pub use search::{Highlight, IndexEntry, SearchResult};
pub use tag::Tag;
