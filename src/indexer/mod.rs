//! Index building for conversation search
//!
//! Entries are derived data: every one can be rebuilt from the conversation
//! list, so the index is replaced wholesale on load and patched per
//! conversation afterwards.
//!
//! - **Full rebuild**: [`SearchIndex::rebuild`] flattens every message of every
//!   conversation into an [`crate::models::IndexEntry`].
//! - **Targeted update**: [`SearchIndex::update_conversation`] swaps one
//!   conversation's entries after a message is appended, edited or deleted.
//! - **Removal**: [`SearchIndex::remove_conversation`] when a conversation is deleted.
//!
//! Persisting the index is the caller's job (see [`crate::service::SearchService`]).

pub mod builder;
pub mod index;

pub use builder::{build_entries, entries_for_conversation};
pub use index::SearchIndex;
