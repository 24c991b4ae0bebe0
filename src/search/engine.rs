use std::collections::HashMap;

use super::scoring::{Query, create_snippet, score_message};
use crate::config::SearchConfig;
use crate::filters::{SearchFilters, matches_filters};
use crate::indexer::SearchIndex;
use crate::models::{Conversation, SearchResult};

/// Run a query over the whole index.
///
/// Blank queries return nothing. Entries whose conversation or message no
/// longer exists in `conversations` are skipped. Results are ordered by
/// descending score; equal scores keep index order. At most `limit` results
/// are returned.
pub fn search(
    index: &SearchIndex,
    query: &str,
    conversations: &[Conversation],
    filters: Option<&SearchFilters>,
    limit: usize,
    config: &SearchConfig,
) -> Vec<SearchResult> {
    let Some(query) = Query::parse(query) else {
        return Vec::new();
    };

    let mut by_id: HashMap<&str, &Conversation> = HashMap::with_capacity(conversations.len());
    for conversation in conversations {
        by_id.entry(conversation.id.as_str()).or_insert(conversation);
    }

    let filters = filters.filter(|f| !f.is_empty());
    let mut results = Vec::new();

    for entry in index.entries() {
        let Some(conversation) = by_id.get(entry.conversation_id.as_str()) else {
            continue;
        };
        let Some(message) = conversation.messages.get(entry.message_index) else {
            continue;
        };

        if let Some(filters) = filters {
            if !matches_filters(filters, entry, message) {
                continue;
            }
        }

        let score =
            score_message(&query, &message.content, &conversation.title, config.phrase_bonus);
        if score.value == 0 {
            continue;
        }

        let snippet =
            create_snippet(&message.content, &score.highlights, config.snippet_max_length);

        results.push(SearchResult {
            conversation_id: conversation.id.clone(),
            conversation_title: conversation.title.clone(),
            message_index: entry.message_index,
            message: message.clone(),
            snippet: snippet.text,
            snippet_offset: snippet.offset,
            highlights: score.highlights,
            score: score.value,
        });
    }

    // Stable: ties keep index order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}
