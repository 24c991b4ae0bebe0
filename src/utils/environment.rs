use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the directory used by [`crate::storage::FileStore`]
pub const DATA_DIR_ENV: &str = "CONVERSATION_SEARCH_DATA_DIR";

const APP_DIR_NAME: &str = "conversation-search";

/// Get the data directory for persisted search state
///
/// - `$CONVERSATION_SEARCH_DATA_DIR` when set and non-empty
/// - otherwise the platform data directory, e.g. `~/.local/share/conversation-search`
pub fn default_data_dir() -> Result<PathBuf> {
    data_dir_from_lookup(|key| env::var(key).ok())
}

/// Same as [`default_data_dir`] with an injectable environment lookup
pub fn data_dir_from_lookup<F>(lookup: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
