//! Persistence adapter for search state
//!
//! Three independently keyed JSON blobs are kept in a [`KeyValueStore`]:
//! - tag records (ordered list of tags)
//! - index entries (a cache, always rebuildable from conversations)
//! - favorite conversation ids
//!
//! Backends:
//! - [`MemoryStore`]: in-process map for tests and ephemeral sessions
//! - [`FileStore`]: one `<key>.json` file per key, atomic writes

pub mod persistence;
pub mod store;

pub use persistence::{load_json, load_json_or_default, save_json};
pub use store::{FileStore, KeyValueStore, MemoryStore};
