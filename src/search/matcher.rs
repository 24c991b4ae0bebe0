//! Query tokenization and case-insensitive substring matching
//!
//! Matching runs on a case-folded copy of the text. Case folding may change
//! the length of a character (`'İ'` lowercases to two chars), so every folded
//! character remembers which original character produced it and highlights
//! are reported in original character offsets.

use crate::models::Highlight;

/// Lowercase `text` char by char
pub fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Split a query into lowercased, non-empty terms
pub fn tokenize(query: &str) -> Vec<String> {
    fold(query).split_whitespace().map(str::to_string).collect()
}

/// Case-folded view of a text with a mapping back to original char offsets
#[derive(Debug, Clone)]
pub struct FoldedText {
    folded: String,
    /// Byte offset in `folded` where each folded char starts
    starts: Vec<usize>,
    /// Original char index that produced each folded char
    origin: Vec<usize>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut starts = Vec::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());

        for (char_index, ch) in text.chars().enumerate() {
            for lower in ch.to_lowercase() {
                starts.push(folded.len());
                origin.push(char_index);
                folded.push(lower);
            }
        }

        Self { folded, starts, origin }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && self.folded.contains(needle)
    }

    /// Non-overlapping occurrences of an already folded `term`, left to right
    pub fn occurrences(&self, term: &str) -> Vec<Highlight> {
        if term.is_empty() {
            return Vec::new();
        }

        self.folded
            .match_indices(term)
            .map(|(byte_start, matched)| {
                let last_byte = byte_start + matched.len() - 1;
                let first = self.char_at_byte(byte_start);
                let last = self.char_at_byte(last_byte);
                Highlight { start: self.origin[first], end: self.origin[last] + 1 }
            })
            .collect()
    }

    /// Index of the folded char containing `byte`
    fn char_at_byte(&self, byte: usize) -> usize {
        self.starts.partition_point(|&start| start <= byte) - 1
    }
}
