/// End-to-end tests for the search service
///
/// These tests verify complete workflows: conversations → index → search → tags/favorites
mod common;

use common::{ConversationBuilder, memory_service, python_help, realistic_conversations};
use conversation_search::{MessageTypeFilter, SearchFilters};

#[test]
fn test_e2e_search_finds_python() {
    let conversations = python_help();
    let mut service = memory_service();
    service.build_index(&conversations);

    let results = service.search("python", &conversations, None);
    assert_eq!(results.len(), 1, "Should find the single matching message");

    let result = &results[0];
    assert_eq!(result.conversation_id, "1");
    assert!(result.score > 0);
    assert!(result.snippet.contains("python"), "Snippet keeps the source casing");

    // Highlights cover every case-insensitive occurrence
    let content = &result.message.content;
    let expected: Vec<usize> =
        content.to_lowercase().match_indices("python").map(|(i, _)| i).collect();
    let starts: Vec<usize> = result.highlights.iter().map(|h| h.start).collect();
    assert_eq!(starts, expected);
    for h in &result.highlights {
        assert_eq!(content[h.start..h.end].to_lowercase(), "python");
    }
}

#[test]
fn test_e2e_search_without_match() {
    let conversations = python_help();
    let mut service = memory_service();
    service.build_index(&conversations);

    assert!(service.search("javascript", &conversations, None).is_empty());
}

#[test]
fn test_e2e_role_filter_hides_user_match() {
    let conversations = python_help();
    let mut service = memory_service();
    service.build_index(&conversations);

    let filters = SearchFilters::new().message_type(MessageTypeFilter::Model);
    assert!(service.search("python", &conversations, Some(&filters)).is_empty());
    assert_eq!(service.search("python", &conversations, None).len(), 1);
}

#[test]
fn test_e2e_tag_lifecycle() {
    let conversations = python_help();
    let mut service = memory_service();
    service.build_index(&conversations);

    let tag = service.create_tag("work", "#ff0000");
    assert!(service.add_tag_to_conversation(&tag.id, "1"));
    assert_eq!(service.get_conversation_tags("1"), vec!["work"]);

    assert!(service.delete_tag(&tag.id));
    assert!(service.get_conversation_tags("1").is_empty());

    // Deleting the tag leaves the conversation untouched
    assert_eq!(conversations, python_help());
    assert_eq!(service.search("python", &conversations, None).len(), 1);
}

#[test]
fn test_e2e_empty_query_returns_nothing() {
    let conversations = realistic_conversations();
    let mut service = memory_service();
    service.build_index(&conversations);

    assert!(service.search("", &conversations, None).is_empty());
    assert!(service.search("   ", &conversations, None).is_empty());
}

#[test]
fn test_e2e_search_is_deterministic() {
    let conversations = realistic_conversations();
    let mut service = memory_service();
    service.build_index(&conversations);

    let first = service.search("the loop", &conversations, None);
    let second = service.search("the loop", &conversations, None);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_e2e_rebuild_is_idempotent() {
    let conversations = realistic_conversations();
    let mut once = memory_service();
    once.build_index(&conversations);

    let mut twice = memory_service();
    twice.build_index(&conversations);
    twice.build_index(&conversations);

    assert_eq!(once.index(), twice.index());
    for query in ["python", "day", "borrow loop", "lisbon"] {
        assert_eq!(
            once.search(query, &conversations, None),
            twice.search(query, &conversations, None)
        );
    }
}

#[test]
fn test_e2e_update_after_edit() {
    let mut conversations = python_help();
    let mut service = memory_service();
    service.build_index(&conversations);

    conversations[0] = ConversationBuilder::new("1")
        .title("Loops")
        .user("How do I write a while loop in rust?")
        .model("Use `while condition { ... }`.")
        .build();
    service.update_index_for_conversation(&conversations[0]);

    assert_eq!(service.index_len(), 2);
    assert!(service.search("python", &conversations, None).is_empty());
    assert_eq!(service.search("while", &conversations, None).len(), 2);
}

#[test]
fn test_e2e_remove_conversation() {
    let conversations = realistic_conversations();
    let mut service = memory_service();
    service.build_index(&conversations);

    service.remove_conversation_from_index("conv-rust");
    assert_eq!(service.index_len(), 4);
    assert!(service.search("borrow", &conversations, None).is_empty());
}

#[test]
fn test_e2e_results_ranked_by_score() {
    let conversations = realistic_conversations();
    let mut service = memory_service();
    service.build_index(&conversations);

    let results = service.search("loop", &conversations, None);
    assert!(results.len() >= 2);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_e2e_favorites() {
    let conversations = realistic_conversations();
    let mut service = memory_service();

    assert!(service.toggle_favorite_conversation("conv-rust"));
    assert!(service.is_conversation_favorite("conv-rust"));

    let favorites = service.get_favorite_conversations(&conversations);
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].title, "Borrow checker");

    assert!(!service.toggle_favorite_conversation("conv-rust"));
    assert!(!service.is_conversation_favorite("conv-rust"));
    assert!(service.get_favorite_conversations(&conversations).is_empty());
}

#[test]
fn test_e2e_auto_tags_are_advisory() {
    let conversations = python_help();
    let service = memory_service();

    let suggestions = service.generate_auto_tags(&conversations[0]);
    assert!(suggestions.contains(&"programming".to_string()));
    assert!(suggestions.contains(&"questions".to_string()));
    assert!(service.get_tags().is_empty(), "Suggestions must not create tags");
}

#[test]
fn test_e2e_conversations_by_tag() {
    let conversations = realistic_conversations();
    let mut service = memory_service();

    let tag = service.create_tag("travel", "#00aa00");
    service.add_tag_to_conversation(&tag.id, "1700000000000");

    let tagged = service.get_conversations_by_tag("travel", &conversations);
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].title, "Trip planning");
    assert_eq!(service.get_tags_by_conversation("1700000000000")[0].color, "#00aa00");
    assert_eq!(service.get_tag(&tag.id).map(|t| t.name.as_str()), Some("travel"));
}
