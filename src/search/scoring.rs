//! Relevance scoring and snippet extraction for a single message
//!
//! Scoring, per query term:
//! - +1 for every case-insensitive occurrence of the term in the message
//! - +2 if the whole query appears verbatim in the message (see [`PhraseBonus`])
//! - +3 if the conversation title contains the term
//!
//! A score of zero means the message is not a result.

use crate::config::PhraseBonus;
use crate::models::Highlight;
use crate::search::matcher::{FoldedText, fold, tokenize};

pub const OCCURRENCE_POINTS: u32 = 1;
pub const PHRASE_POINTS: u32 = 2;
pub const TITLE_POINTS: u32 = 3;

pub const ELLIPSIS: char = '…';

/// Parsed query, folded once and reused for every index entry
#[derive(Debug, Clone)]
pub struct Query {
    pub terms: Vec<String>,
    pub phrase: String,
}

impl Query {
    /// `None` for blank queries
    pub fn parse(query: &str) -> Option<Self> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return None;
        }
        Some(Self { terms, phrase: fold(query.trim()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
    /// Grouped by query term, each group in text order
    pub highlights: Vec<Highlight>,
}

pub fn score_message(query: &Query, content: &str, title: &str, bonus: PhraseBonus) -> Score {
    let content = FoldedText::new(content);
    let title = fold(title);
    let has_phrase = content.contains(&query.phrase);

    let mut value = 0;
    let mut highlights = Vec::new();

    for term in &query.terms {
        let hits = content.occurrences(term);
        value += OCCURRENCE_POINTS * hits.len() as u32;
        highlights.extend(hits);

        if has_phrase && bonus == PhraseBonus::PerTerm {
            value += PHRASE_POINTS;
        }

        if title.contains(term.as_str()) {
            value += TITLE_POINTS;
        }
    }

    if has_phrase && bonus == PhraseBonus::Once {
        value += PHRASE_POINTS;
    }

    Score { value, highlights }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    /// Char index in the original content where the window starts
    pub offset: usize,
}

/// Cut a window of at most `max_length` chars around the first highlight.
///
/// Content that already fits is returned unchanged. Otherwise the window
/// starts `max_length / 2` chars before the first highlight and an ellipsis
/// marks each clipped side.
pub fn create_snippet(content: &str, highlights: &[Highlight], max_length: usize) -> Snippet {
    let length = content.chars().count();
    if length <= max_length {
        return Snippet { text: content.to_string(), offset: 0 };
    }

    let start = highlights.first().map_or(0, |h| h.start.saturating_sub(max_length / 2));

    let mut text = String::with_capacity(max_length + 2 * ELLIPSIS.len_utf8());
    if start > 0 {
        text.push(ELLIPSIS);
    }
    text.extend(content.chars().skip(start).take(max_length));
    if start + max_length < length {
        text.push(ELLIPSIS);
    }

    Snippet { text, offset: start }
}
