//! Flattening conversations into per-message index entries.

use std::collections::HashSet;

use crate::models::{Conversation, IndexEntry};
use crate::search::matcher::fold;
use crate::tags::TagStore;

/// Index entries for every message of one conversation, in message order
pub fn entries_for_conversation(conversation: &Conversation, tags: &TagStore) -> Vec<IndexEntry> {
    let tag_names = tags.tag_name_set(&conversation.id);
    let created_at = conversation.created_at_or_legacy();

    conversation
        .messages
        .iter()
        .enumerate()
        .map(|(message_index, message)| IndexEntry {
            conversation_id: conversation.id.clone(),
            message_index,
            lowercased_content: fold(&message.content),
            role: message.role,
            has_files: message.has_files(),
            tag_names: tag_names.clone(),
            created_at,
        })
        .collect()
}

/// Build index entries for a whole conversation list
///
/// A conversation id seen twice keeps its first occurrence, so each
/// (conversation, message) pair has at most one entry.
pub fn build_entries(conversations: &[Conversation], tags: &TagStore) -> Vec<IndexEntry> {
    let total_messages: usize = conversations.iter().map(|c| c.messages.len()).sum();
    let mut entries = Vec::with_capacity(total_messages);
    let mut seen = HashSet::with_capacity(conversations.len());

    for conversation in conversations {
        if !seen.insert(conversation.id.as_str()) {
            log::warn!("Skipping duplicate conversation id '{}' while indexing", conversation.id);
            continue;
        }
        entries.extend(entries_for_conversation(conversation, tags));
    }

    log::debug!("Indexed {} entries from {} conversations", entries.len(), seen.len());

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attachment, Message, Role};

    fn conversation(id: &str, contents: &[(Role, &str)]) -> Conversation {
        let mut conversation = Conversation::new(id, format!("Conversation {}", id));
        conversation.messages = contents.iter().map(|(r, c)| Message::new(*r, *c)).collect();
        conversation
    }

    #[test]
    fn test_entries_for_conversation() {
        let mut conv = conversation("1", &[(Role::User, "Hello World"), (Role::Model, "Hi")]);
        conv.messages[1].files.push(Attachment { id: "f1".into(), name: "a.txt".into() });

        let mut tags = TagStore::new(true);
        let tag = tags.create_tag("work", "#f00");
        tags.add_tag_to_conversation(&tag.id, "1");

        let entries = entries_for_conversation(&conv, &tags);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message_index, 0);
        assert_eq!(entries[0].lowercased_content, "hello world");
        assert_eq!(entries[0].role, Role::User);
        assert!(!entries[0].has_files);
        assert!(entries[1].has_files);
        assert!(entries[1].tag_names.contains("work"));
    }

    #[test]
    fn test_build_entries_skips_duplicate_ids() {
        let conversations = vec![
            conversation("1", &[(Role::User, "first")]),
            conversation("1", &[(Role::User, "shadow"), (Role::Model, "copy")]),
            conversation("2", &[(Role::User, "second")]),
        ];

        let entries = build_entries(&conversations, &TagStore::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].lowercased_content, "first");
        assert_eq!(entries[1].conversation_id, "2");
    }

    #[test]
    fn test_build_entries_derives_legacy_timestamp() {
        let conversations = vec![conversation("1718452800000", &[(Role::User, "dated")])];
        let entries = build_entries(&conversations, &TagStore::default());
        assert!(entries[0].created_at.is_some());
    }
}
