use std::collections::BTreeSet;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Conversation, Tag};

/// Named, colored labels and their conversation membership
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    tags: Vec<Tag>,
    unique_names: bool,
}

impl TagStore {
    pub fn new(unique_names: bool) -> Self {
        Self { tags: Vec::new(), unique_names }
    }

    /// Restore persisted tags. Duplicate ids keep their first occurrence and
    /// duplicate members inside a tag are collapsed.
    pub fn from_tags(tags: Vec<Tag>, unique_names: bool) -> Self {
        let mut store = Self::new(unique_names);
        for mut tag in tags {
            if store.tag(&tag.id).is_some() {
                log::warn!("Dropping duplicate tag id '{}'", tag.id);
                continue;
            }
            let mut seen = BTreeSet::new();
            tag.conversation_ids.retain(|id| seen.insert(id.clone()));
            store.tags.push(tag);
        }
        store
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn tag(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == tag_id)
    }

    fn tag_mut(&mut self, tag_id: &str) -> Option<&mut Tag> {
        self.tags.iter_mut().find(|t| t.id == tag_id)
    }

    /// Create a tag with a fresh id and no members.
    ///
    /// With unique names enabled, a name already in use (ignoring case) returns
    /// the existing tag untouched.
    pub fn create_tag(&mut self, name: &str, color: &str) -> Tag {
        let name = name.trim();

        if self.unique_names {
            let lower = name.to_lowercase();
            if let Some(existing) = self.tags.iter().find(|t| t.name.to_lowercase() == lower) {
                log::debug!("Tag '{}' already exists as {}", name, existing.id);
                return existing.clone();
            }
        }

        let tag = Tag {
            id: format!("tag-{}", Uuid::new_v4()),
            name: name.to_string(),
            color: color.to_string(),
            conversation_ids: Vec::new(),
            created_at: Utc::now(),
        };
        self.tags.push(tag.clone());
        tag
    }

    /// Remove a tag and its membership record. Conversations are not touched.
    pub fn delete_tag(&mut self, tag_id: &str) -> bool {
        match self.tags.iter().position(|t| t.id == tag_id) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    /// Idempotent; `false` only when the tag does not exist
    pub fn add_tag_to_conversation(&mut self, tag_id: &str, conversation_id: &str) -> bool {
        let Some(tag) = self.tag_mut(tag_id) else {
            return false;
        };
        if !tag.contains(conversation_id) {
            tag.conversation_ids.push(conversation_id.to_string());
        }
        true
    }

    /// Idempotent; `false` only when the tag does not exist
    pub fn remove_tag_from_conversation(&mut self, tag_id: &str, conversation_id: &str) -> bool {
        let Some(tag) = self.tag_mut(tag_id) else {
            return false;
        };
        tag.conversation_ids.retain(|id| id != conversation_id);
        true
    }

    /// Names of the tags assigned to a conversation, in tag creation order
    pub fn conversation_tags(&self, conversation_id: &str) -> Vec<String> {
        self.tags_by_conversation(conversation_id).into_iter().map(|t| t.name.clone()).collect()
    }

    pub fn tags_by_conversation(&self, conversation_id: &str) -> Vec<&Tag> {
        self.tags.iter().filter(|t| t.contains(conversation_id)).collect()
    }

    /// Tag names as stored on index entries
    pub fn tag_name_set(&self, conversation_id: &str) -> BTreeSet<String> {
        self.conversation_tags(conversation_id).into_iter().collect()
    }

    /// Conversations carrying any tag with exactly this name, in input order
    pub fn conversations_by_tag<'a>(
        &self,
        tag_name: &str,
        conversations: &'a [Conversation],
    ) -> Vec<&'a Conversation> {
        let named: Vec<&Tag> = self.tags.iter().filter(|t| t.name == tag_name).collect();
        if named.is_empty() {
            return Vec::new();
        }
        conversations.iter().filter(|c| named.iter().any(|t| t.contains(&c.id))).collect()
    }
}
