use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::models::Conversation;
use crate::utils::validate_file_size;

/// Parse a conversation snapshot from JSON text.
///
/// Accepts either a bare array of conversations (the chat client's own
/// storage blob) or a backup document with a top-level `conversations` array.
/// Malformed conversations are logged and skipped; more than 50% failures is
/// treated as a corrupted snapshot.
pub fn parse_conversations_json(json: &str) -> Result<Vec<Conversation>> {
    let root: Value = serde_json::from_str(json).context("Failed to parse conversation JSON")?;

    let items = match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("conversations") {
            Some(Value::Array(items)) => items,
            Some(_) => bail!("`conversations` field must be an array"),
            None => bail!("Snapshot has no `conversations` field"),
        },
        _ => bail!("Conversation snapshot must be an array or an object"),
    };

    let total = items.len();
    let mut conversations = Vec::with_capacity(total);
    let mut skipped_count = 0;

    for (position, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Conversation>(item) {
            Ok(conversation) => conversations.push(conversation),
            Err(e) => {
                log::warn!("Skipping malformed conversation at position {}: {}", position, e);
                skipped_count += 1;
            }
        }
    }

    if total > 0 {
        let failure_rate = (skipped_count as f64) / (total as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many malformed conversations: {} of {} failed ({:.1}%)",
                skipped_count,
                total,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        log::info!(
            "Parsed conversation snapshot: {} conversations ({} skipped)",
            conversations.len(),
            skipped_count
        );
    }

    Ok(conversations)
}

/// Load a conversation snapshot file (max 10MB)
pub fn load_conversations_file(path: &Path) -> Result<Vec<Conversation>> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open conversation file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut json = String::new();
    file.read_to_string(&mut json)
        .with_context(|| format!("Failed to read conversation file: {}", path.display()))?;

    parse_conversations_json(&json)
}
