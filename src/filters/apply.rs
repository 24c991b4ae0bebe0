use super::criteria::{DateRange, SearchFilters};
use crate::models::{IndexEntry, Message};

/// Evaluate filters against an index entry and the live message it points at
///
/// Role comes from the live message; attachments, tags and creation time from
/// the index entry.
pub fn matches_filters(filters: &SearchFilters, entry: &IndexEntry, message: &Message) -> bool {
    filters.message_type.accepts(message.role)
        && match_files(entry, filters.has_files)
        && match_tags(entry, &filters.tags)
        && match_date_range(entry, filters.date_range.as_ref())
}

fn match_files(entry: &IndexEntry, has_files: Option<bool>) -> bool {
    has_files.is_none_or(|wanted| entry.has_files == wanted)
}

/// Any listed tag matches (exact name)
fn match_tags(entry: &IndexEntry, tags: &[String]) -> bool {
    tags.is_empty() || tags.iter().any(|tag| entry.tag_names.contains(tag))
}

/// Entries without a derivable creation time never fall inside a range
fn match_date_range(entry: &IndexEntry, range: Option<&DateRange>) -> bool {
    match range {
        None => true,
        Some(range) => entry.created_at.is_some_and(|ts| range.contains(ts)),
    }
}
