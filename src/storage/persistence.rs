//! JSON persistence with catch-and-log semantics
//!
//! Persisted state is a cache of what the user sees in memory. A failed read
//! or a blob of the wrong shape yields the default value; a failed write is
//! logged and reported as `false`. Neither ever reaches the caller as an error.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::store::KeyValueStore;

/// Load and deserialize the blob stored under `key`.
///
/// `Ok(None)` when nothing is stored; errors for read failures and malformed JSON.
pub fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key).with_context(|| format!("Failed to read '{}'", key))? else {
        return Ok(None);
    };

    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed data stored under '{}'", key))?;
    Ok(Some(value))
}

/// Like [`load_json`], but any failure is logged and replaced by `T::default()`
pub fn load_json_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("Error loading '{}', starting empty: {:#}", key, e);
            T::default()
        }
    }
}

/// Serialize `value` and store it under `key`. Returns whether the write succeeded.
pub fn save_json<T>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
{
    let result = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize '{}'", key))
        .and_then(|json| store.set(key, &json));

    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Error saving '{}': {:#}", key, e);
            false
        }
    }
}
