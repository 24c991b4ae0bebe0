//! Keyword heuristics suggesting tag names for a conversation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Conversation;

struct AutoTagRule {
    name: &'static str,
    patterns: Vec<Regex>,
}

impl AutoTagRule {
    fn new(name: &'static str, patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).expect("auto-tag patterns are valid regexes"))
            .collect();
        Self { name, patterns }
    }

    fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// Rules in suggestion order
static AUTO_TAG_RULES: Lazy<Vec<AutoTagRule>> = Lazy::new(|| {
    vec![
        AutoTagRule::new(
            "programming",
            &[
                r"\b(code|programming|javascript|python|react|html|css|function|variable|array|object)\b",
            ],
        ),
        AutoTagRule::new(
            "writing",
            &[r"\b(write|writing|essay|article|story|blog|content|draft)\b"],
        ),
        AutoTagRule::new(
            "learning",
            &[r"\b(learn|learning|explain|understand|tutorial|guide|how to)\b"],
        ),
        AutoTagRule::new(
            "creative",
            &[r"\b(creative|idea|brainstorm|design|art|music|poem|story)\b"],
        ),
        AutoTagRule::new(
            "business",
            &[r"\b(business|marketing|strategy|plan|meeting|project|client)\b"],
        ),
        AutoTagRule::new(
            "technical",
            &[r"\b(technical|api|database|server|deployment|bug|error|debug)\b"],
        ),
        AutoTagRule::new("questions", &[r"\?", r"\b(what|how|why|when|where|who)\b"]),
    ]
});

/// Suggest tag names for a conversation.
///
/// Advisory only: nothing is created or assigned.
pub fn generate_auto_tags(conversation: &Conversation) -> Vec<String> {
    let text = conversation
        .messages
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    AUTO_TAG_RULES
        .iter()
        .filter(|rule| rule.matches(&text))
        .map(|rule| rule.name.to_string())
        .collect()
}
