//! Search service: the index, tag store and favorites behind one object
//!
//! The application constructs one [`SearchService`] at startup, calls
//! [`SearchService::load`] to restore persisted state, and hands it to
//! whatever needs search. Every mutation is written back to the
//! [`KeyValueStore`] right away; write failures are logged and the in-memory
//! state stays authoritative for the session.

use crate::config::SearchConfig;
use crate::favorites::FavoritesStore;
use crate::filters::SearchFilters;
use crate::indexer::SearchIndex;
use crate::models::{Conversation, IndexEntry, SearchResult, Tag};
use crate::search;
use crate::storage::{KeyValueStore, load_json_or_default, save_json};
use crate::tags::{TagStore, generate_auto_tags};

pub struct SearchService<S: KeyValueStore> {
    config: SearchConfig,
    store: S,
    index: SearchIndex,
    tags: TagStore,
    favorites: FavoritesStore,
}

impl<S: KeyValueStore> SearchService<S> {
    /// Empty service; nothing is read from `store` until [`Self::load`]
    pub fn new(store: S, config: SearchConfig) -> Self {
        let tags = TagStore::new(config.unique_tag_names);
        Self { config, store, index: SearchIndex::new(), tags, favorites: FavoritesStore::new() }
    }

    /// Construct and load persisted state in one step
    pub fn open(store: S, config: SearchConfig) -> Self {
        let mut service = Self::new(store, config);
        service.load();
        service
    }

    /// Replace in-memory state with what the store holds.
    ///
    /// Missing, unreadable or malformed blobs load as empty.
    pub fn load(&mut self) {
        let keys = &self.config.keys;

        let tags: Vec<Tag> = load_json_or_default(&self.store, &keys.tags);
        let entries: Vec<IndexEntry> = load_json_or_default(&self.store, &keys.index);
        let favorites: Vec<String> = load_json_or_default(&self.store, &keys.favorites);

        self.tags = TagStore::from_tags(tags, self.config.unique_tag_names);
        self.index = SearchIndex::from_entries(entries);
        self.favorites = FavoritesStore::from_ids(favorites);

        log::debug!(
            "Loaded search state: {} tags, {} index entries, {} favorites",
            self.tags.tags().len(),
            self.index.len(),
            self.favorites.ids().len()
        );
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    // Index management

    pub fn build_index(&mut self, conversations: &[Conversation]) {
        self.index.rebuild(conversations, &self.tags);
        self.save_index();
    }

    pub fn update_index_for_conversation(&mut self, conversation: &Conversation) {
        self.index.update_conversation(conversation, &self.tags);
        self.save_index();
    }

    pub fn remove_conversation_from_index(&mut self, conversation_id: &str) {
        let removed = self.index.remove_conversation(conversation_id);
        log::debug!("Removed {} index entries for conversation {}", removed, conversation_id);
        self.save_index();
    }

    // Search

    /// Search with the configured default limit
    pub fn search(
        &self,
        query: &str,
        conversations: &[Conversation],
        filters: Option<&SearchFilters>,
    ) -> Vec<SearchResult> {
        self.search_with_limit(query, conversations, filters, self.config.default_limit)
    }

    pub fn search_with_limit(
        &self,
        query: &str,
        conversations: &[Conversation],
        filters: Option<&SearchFilters>,
        limit: usize,
    ) -> Vec<SearchResult> {
        search::search(&self.index, query, conversations, filters, limit, &self.config)
    }

    // Tags

    pub fn generate_auto_tags(&self, conversation: &Conversation) -> Vec<String> {
        generate_auto_tags(conversation)
    }

    pub fn get_tags(&self) -> &[Tag] {
        self.tags.tags()
    }

    pub fn get_tag(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.tag(tag_id)
    }

    pub fn create_tag(&mut self, name: &str, color: &str) -> Tag {
        let tag = self.tags.create_tag(name, color);
        self.save_tags();
        tag
    }

    /// Delete a tag; conversations keep their messages and titles
    pub fn delete_tag(&mut self, tag_id: &str) -> bool {
        let Some(members) = self.tags.tag(tag_id).map(|t| t.conversation_ids.clone()) else {
            return false;
        };
        self.tags.delete_tag(tag_id);
        self.save_tags();
        self.refresh_index_tags(&members);
        true
    }

    pub fn add_tag_to_conversation(&mut self, tag_id: &str, conversation_id: &str) -> bool {
        if !self.tags.add_tag_to_conversation(tag_id, conversation_id) {
            return false;
        }
        self.save_tags();
        self.refresh_index_tags(&[conversation_id.to_string()]);
        true
    }

    pub fn remove_tag_from_conversation(&mut self, tag_id: &str, conversation_id: &str) -> bool {
        if !self.tags.remove_tag_from_conversation(tag_id, conversation_id) {
            return false;
        }
        self.save_tags();
        self.refresh_index_tags(&[conversation_id.to_string()]);
        true
    }

    pub fn get_conversation_tags(&self, conversation_id: &str) -> Vec<String> {
        self.tags.conversation_tags(conversation_id)
    }

    pub fn get_tags_by_conversation(&self, conversation_id: &str) -> Vec<&Tag> {
        self.tags.tags_by_conversation(conversation_id)
    }

    pub fn get_conversations_by_tag<'a>(
        &self,
        tag_name: &str,
        conversations: &'a [Conversation],
    ) -> Vec<&'a Conversation> {
        self.tags.conversations_by_tag(tag_name, conversations)
    }

    // Favorites

    pub fn toggle_favorite_conversation(&mut self, conversation_id: &str) -> bool {
        let now_favorite = self.favorites.toggle(conversation_id);
        let keys = &self.config.keys;
        save_json(&mut self.store, &keys.favorites, self.favorites.ids());
        now_favorite
    }

    pub fn is_conversation_favorite(&self, conversation_id: &str) -> bool {
        self.favorites.contains(conversation_id)
    }

    pub fn get_favorite_conversations<'a>(
        &self,
        conversations: &'a [Conversation],
    ) -> Vec<&'a Conversation> {
        self.favorites.favorites_in(conversations)
    }

    // Persistence

    fn refresh_index_tags(&mut self, conversation_ids: &[String]) {
        if conversation_ids.is_empty() {
            return;
        }
        for conversation_id in conversation_ids {
            let names = self.tags.tag_name_set(conversation_id);
            self.index.set_tag_names(conversation_id, &names);
        }
        self.save_index();
    }

    fn save_index(&mut self) {
        save_json(&mut self.store, &self.config.keys.index, self.index.entries());
    }

    fn save_tags(&mut self) {
        save_json(&mut self.store, &self.config.keys.tags, self.tags.tags());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Message, Role};
    use crate::storage::MemoryStore;

    fn python_help() -> Vec<Conversation> {
        let mut conversation = Conversation::new("1", "Python Help");
        conversation.messages =
            vec![Message::new(Role::User, "How do I write a for loop in python?")];
        vec![conversation]
    }

    fn service() -> SearchService<MemoryStore> {
        SearchService::new(MemoryStore::new(), SearchConfig::default())
    }

    #[test]
    fn test_build_index_persists() {
        let mut service = service();
        service.build_index(&python_help());

        assert_eq!(service.index_len(), 1);
        let stored = service.store().get("earth-search-index").unwrap().unwrap();
        assert!(stored.contains("\"conversationId\":\"1\""));
    }

    #[test]
    fn test_tag_assignment_refreshes_index() {
        let conversations = python_help();
        let mut service = service();
        service.build_index(&conversations);

        let tag = service.create_tag("work", "#ff0000");
        assert!(service.add_tag_to_conversation(&tag.id, "1"));
        assert!(service.index().entries()[0].tag_names.contains("work"));

        let filters = SearchFilters::new().tag("work");
        assert_eq!(service.search("python", &conversations, Some(&filters)).len(), 1);

        assert!(service.delete_tag(&tag.id));
        assert!(service.index().entries()[0].tag_names.is_empty());
        assert!(service.search("python", &conversations, Some(&filters)).is_empty());
    }

    #[test]
    fn test_missing_tag_operations_return_false() {
        let mut service = service();
        assert!(!service.delete_tag("tag-missing"));
        assert!(!service.add_tag_to_conversation("tag-missing", "1"));
        assert!(!service.remove_tag_from_conversation("tag-missing", "1"));
    }

    #[test]
    fn test_favorites_persist_independently() {
        let mut service = service();
        assert!(service.toggle_favorite_conversation("1"));
        assert_eq!(
            service.store().get("earth-favorite-conversations").unwrap().as_deref(),
            Some(r#"["1"]"#)
        );
        assert!(service.store().get("earth-conversation-tags").unwrap().is_none());
        assert!(service.store().get("earth-search-index").unwrap().is_none());
    }

    #[test]
    fn test_load_restores_state() {
        let conversations = python_help();
        let mut first = service();
        first.build_index(&conversations);
        let tag = first.create_tag("work", "#ff0000");
        first.add_tag_to_conversation(&tag.id, "1");
        first.toggle_favorite_conversation("1");

        let store = first.store().clone();
        let second = SearchService::open(store, SearchConfig::default());

        assert_eq!(second.index_len(), 1);
        assert_eq!(second.get_conversation_tags("1"), vec!["work"]);
        assert!(second.is_conversation_favorite("1"));
        assert_eq!(second.search("python", &conversations, None).len(), 1);
    }
}
