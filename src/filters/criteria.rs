use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Restrict results by message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageTypeFilter {
    User,
    Model,
    #[default]
    All,
}

impl MessageTypeFilter {
    pub fn accepts(&self, role: Role) -> bool {
        match self {
            MessageTypeFilter::User => role == Role::User,
            MessageTypeFilter::Model => role == Role::Model,
            MessageTypeFilter::All => true,
        }
    }
}

/// Inclusive creation-time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// Optional search filters, combined with AND
///
/// An unset field does not restrict anything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub message_type: MessageTypeFilter,
    #[serde(default)]
    pub has_files: Option<bool>,
    /// Keep entries whose conversation carries at least one of these tag names
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_type(mut self, message_type: MessageTypeFilter) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn has_files(mut self, has_files: bool) -> Self {
        self.has_files = Some(has_files);
        self
    }

    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    pub fn date_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.date_range = Some(DateRange::new(start, end));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.message_type == MessageTypeFilter::All
            && self.has_files.is_none()
            && self.tags.is_empty()
            && self.date_range.is_none()
    }
}
