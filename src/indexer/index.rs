use std::collections::BTreeSet;

use super::builder::{build_entries, entries_for_conversation};
use crate::models::{Conversation, IndexEntry};
use crate::tags::TagStore;

/// In-memory list of index entries, scanned linearly by search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted index. Repeated (conversation, message) pairs keep
    /// their first entry.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Self {
        let mut seen = BTreeSet::new();
        let entries = entries
            .into_iter()
            .filter(|e| seen.insert((e.conversation_id.clone(), e.message_index)))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole index
    pub fn rebuild(&mut self, conversations: &[Conversation], tags: &TagStore) {
        self.entries = build_entries(conversations, tags);
    }

    /// Drop a conversation's entries and append fresh ones for its current messages
    pub fn update_conversation(&mut self, conversation: &Conversation, tags: &TagStore) {
        self.remove_conversation(&conversation.id);
        self.entries.extend(entries_for_conversation(conversation, tags));
    }

    /// Returns the number of entries removed
    pub fn remove_conversation(&mut self, conversation_id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.conversation_id != conversation_id);
        before - self.entries.len()
    }

    /// Refresh the tag names stored on a conversation's entries
    pub fn set_tag_names(&mut self, conversation_id: &str, tag_names: &BTreeSet<String>) {
        for entry in self.entries.iter_mut().filter(|e| e.conversation_id == conversation_id) {
            entry.tag_names.clone_from(tag_names);
        }
    }
}
