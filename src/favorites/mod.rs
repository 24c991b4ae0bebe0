//! Favorite conversations: a set of ids kept in toggle order

use crate::models::Conversation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesStore {
    ids: Vec<String>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore persisted ids, dropping repeats
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut store = Self::new();
        for id in ids {
            if !store.contains(&id) {
                store.ids.push(id);
            }
        }
        store
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns `true` if the conversation is now a favorite
    pub fn toggle(&mut self, conversation_id: &str) -> bool {
        match self.ids.iter().position(|id| id == conversation_id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(conversation_id.to_string());
                true
            }
        }
    }

    pub fn contains(&self, conversation_id: &str) -> bool {
        self.ids.iter().any(|id| id == conversation_id)
    }

    /// Favorite conversations from `conversations`, in input order
    pub fn favorites_in<'a>(&self, conversations: &'a [Conversation]) -> Vec<&'a Conversation> {
        conversations.iter().filter(|c| self.contains(&c.id)).collect()
    }
}
