//! Conversation search
//!
//! Three layers, leaf first:
//! - [`matcher`]: query tokenization and case-insensitive substring matching
//! - [`scoring`]: term-frequency scoring and snippet extraction for one message
//! - [`engine`]: filters, full linear scan of the index, ranking and truncation
//!
//! There is no inverted index. A query costs one pass over every indexed
//! message, which is fine for a single user's chat history.

pub mod engine;
pub mod matcher;
pub mod scoring;

pub use engine::search;
pub use matcher::{FoldedText, fold, tokenize};
pub use scoring::{Query, Score, Snippet, create_snippet, score_message};
