//! Search engine configuration
//!
//! Defaults reproduce the web client's behavior. A handful of knobs can be
//! overridden through environment variables:
//!
//! - `CONVERSATION_SEARCH_SNIPPET_LENGTH` - snippet window in characters
//! - `CONVERSATION_SEARCH_RESULT_LIMIT` - result cap used by `search`
//! - `CONVERSATION_SEARCH_PHRASE_BONUS` - `per-term` or `once`
//!
//! Invalid values are logged and ignored.

use std::env;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub const SNIPPET_LENGTH_ENV: &str = "CONVERSATION_SEARCH_SNIPPET_LENGTH";
pub const RESULT_LIMIT_ENV: &str = "CONVERSATION_SEARCH_RESULT_LIMIT";
pub const PHRASE_BONUS_ENV: &str = "CONVERSATION_SEARCH_PHRASE_BONUS";

pub const DEFAULT_SNIPPET_LENGTH: usize = 150;
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// How the exact-phrase bonus is applied during scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhraseBonus {
    /// +2 for every query term while the full phrase is present. Matches the
    /// relevance numbers existing clients already produce.
    #[default]
    PerTerm,
    /// +2 once per entry when the full phrase is present
    Once,
}

impl FromStr for PhraseBonus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "per-term" | "per_term" => Ok(PhraseBonus::PerTerm),
            "once" => Ok(PhraseBonus::Once),
            other => bail!("Unknown phrase bonus mode: '{}' (expected per-term or once)", other),
        }
    }
}

/// Keys of the persisted blobs inside the key/value store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub tags: String,
    pub index: String,
    pub favorites: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tags: "earth-conversation-tags".to_string(),
            index: "earth-search-index".to_string(),
            favorites: "earth-favorite-conversations".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub snippet_max_length: usize,
    pub default_limit: usize,
    pub phrase_bonus: PhraseBonus,
    /// Reject a second tag whose name differs only in case
    pub unique_tag_names: bool,
    pub keys: StorageKeys,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snippet_max_length: DEFAULT_SNIPPET_LENGTH,
            default_limit: DEFAULT_RESULT_LIMIT,
            phrase_bonus: PhraseBonus::default(),
            unique_tag_names: true,
            keys: StorageKeys::default(),
        }
    }
}

impl SearchConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SNIPPET_LENGTH_ENV) {
            match parse_positive(&value) {
                Some(length) => config.snippet_max_length = length,
                None => log::warn!("Ignoring invalid {}: '{}'", SNIPPET_LENGTH_ENV, value),
            }
        }

        if let Some(value) = lookup(RESULT_LIMIT_ENV) {
            match parse_positive(&value) {
                Some(limit) => config.default_limit = limit,
                None => log::warn!("Ignoring invalid {}: '{}'", RESULT_LIMIT_ENV, value),
            }
        }

        if let Some(value) = lookup(PHRASE_BONUS_ENV) {
            match value.parse::<PhraseBonus>() {
                Ok(mode) => config.phrase_bonus = mode,
                Err(e) => log::warn!("Ignoring invalid {}: {}", PHRASE_BONUS_ENV, e),
            }
        }

        config
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
