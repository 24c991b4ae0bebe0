//! Conversation Search - local search and organization for chat histories
//!
//! This library indexes the conversations of a chat client and provides:
//!
//! - A per-message search index, rebuilt wholesale or patched per conversation
//! - Term-frequency scoring with highlighted, length-bounded snippets
//! - Filters by author, attachments, tags and creation date
//! - User-defined tags with keyword-based tag suggestions
//! - Favorite conversations
//! - Best-effort persistence of all of the above as JSON blobs in a key/value store
//!
//! # Example
//!
//! ```no_run
//! use conversation_search::{Conversation, FileStore, SearchConfig, SearchService};
//! use conversation_search::utils::default_data_dir;
//!
//! let store = FileStore::open(default_data_dir()?)?;
//! let mut service = SearchService::open(store, SearchConfig::from_env());
//!
//! let conversations: Vec<Conversation> = Vec::new();
//! service.build_index(&conversations);
//! for result in service.search("for loop", &conversations, None) {
//!     println!("{} ({}): {}", result.conversation_title, result.score, result.snippet);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod favorites;
pub mod filters;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod search;
pub mod service;
pub mod storage;
pub mod tags;
pub mod utils;

// Re-export commonly used types
pub use config::{PhraseBonus, SearchConfig, StorageKeys};
pub use filters::{DateRange, MessageTypeFilter, SearchFilters};
pub use indexer::SearchIndex;
pub use models::{Attachment, Conversation, Highlight, IndexEntry, Message, Role, SearchResult, Tag};
pub use parsers::{load_conversations_file, parse_conversations_json};
pub use service::SearchService;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
