//! Filtering of index entries for list and search views.

use super::entry::IndexEntry;
use crate::domain::Tag;
use chrono::{DateTime, Utc};

/// Criteria for selecting index entries.
///
/// An entry matches when:
/// - the free text (case-insensitive) appears in the profile name, the note
///   text, or any tag
/// - every requested tag is present
/// - it was updated on or after `updated_since`
///
/// Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct EntryQuery {
    text: Option<String>,
    tags: Vec<Tag>,
    updated_since: Option<DateTime<Utc>>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text filter. Blank text is ignored.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into().trim().to_lowercase();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    /// Requires a tag (AND with previously required tags).
    pub fn tag(mut self, tag: Tag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Requires the entry to have been updated on or after `since`.
    pub fn updated_since(mut self, since: DateTime<Utc>) -> Self {
        self.updated_since = Some(since);
        self
    }

    /// Returns true if the query needs full note text to evaluate.
    pub fn needs_note_text(&self) -> bool {
        self.text.is_some()
    }

    /// Tests an entry. `note_text` is the full note text when available;
    /// otherwise the entry's preview is searched.
    pub fn matches(&self, entry: &IndexEntry, note_text: Option<&str>) -> bool {
        if let Some(since) = self.updated_since
            && entry.updated_at() < since
        {
            return false;
        }

        if !self.tags.iter().all(|t| entry.tags().contains(t)) {
            return false;
        }

        match &self.text {
            None => true,
            Some(q) => {
                entry.profile_name().to_lowercase().contains(q.as_str())
                    || note_text
                        .unwrap_or(entry.preview())
                        .to_lowercase()
                        .contains(q.as_str())
                    || entry.tags().iter().any(|t| t.as_str().contains(q.as_str()))
            }
        }
    }
}
