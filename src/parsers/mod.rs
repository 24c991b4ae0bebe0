//! JSON parsers for conversation snapshots handed over by the chat subsystem
//!
//! # Error Handling Strategy
//!
//! Same graceful degradation the index relies on everywhere else:
//!
//! - **Individual conversation failures**: a malformed conversation is logged and skipped,
//!   so one bad record does not hide the rest of the history from search.
//!
//! - **Catastrophic failure detection**: if more than 50% of the conversations fail to
//!   deserialize, or the file exceeds 10MB, the loader returns an error instead of
//!   silently indexing a fragment.
//!
//! - **Error propagation**: uses `anyhow::Result` with context. Callers report the error
//!   and fall back to whatever conversations they already hold.

pub mod conversations;
pub mod deserializers;

pub use conversations::{load_conversations_file, parse_conversations_json};
