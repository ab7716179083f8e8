//! Index entry and the singleton index document.

use crate::domain::{ProfileId, ProfileNote, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of characters of note text kept in a preview.
pub const PREVIEW_CHARS: usize = 100;

/// Derives the list-view preview of a note's text.
///
/// Takes the first [`PREVIEW_CHARS`] characters, replaces newlines with
/// spaces and trims the result.
pub fn make_preview(notes: &str) -> String {
    let head: String = notes.chars().take(PREVIEW_CHARS).collect();
    head.replace('\n', " ").trim().to_string()
}

/// Summary of one saved note, kept in the index for listing without loading
/// full note text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    profile_id: ProfileId,
    profile_name: String,
    profile_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_image_url: Option<String>,
    #[serde(default)]
    tags: Vec<Tag>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    preview: String,
}

impl IndexEntry {
    /// Projects a note into its index entry.
    pub fn from_note(note: &ProfileNote) -> Self {
        Self {
            profile_id: note.profile_id().clone(),
            profile_name: note.profile_name().to_string(),
            profile_url: note.profile_url().to_string(),
            profile_image_url: note.profile_image_url().map(str::to_string),
            tags: note.tags().to_vec(),
            updated_at: note.updated_at(),
            preview: make_preview(note.notes()),
        }
    }

    pub fn profile_id(&self) -> &ProfileId {
        &self.profile_id
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url.as_deref()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }
}

/// The singleton list of every profile that has a saved note.
///
/// Entries are ordered most recently updated first and `profile_id` is unique.
/// `revision` counts index writes and lets readers notice concurrent changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesIndex {
    #[serde(default)]
    profiles: Vec<IndexEntry>,
    #[serde(default)]
    revision: u64,
}

impl NotesIndex {
    pub fn profiles(&self) -> &[IndexEntry] {
        &self.profiles
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Looks up the entry for a profile.
    pub fn get(&self, id: &ProfileId) -> Option<&IndexEntry> {
        self.profiles.iter().find(|e| e.profile_id == *id)
    }

    /// Replaces or appends the entry, then restores recency order.
    pub(crate) fn upsert(&mut self, entry: IndexEntry) {
        match self
            .profiles
            .iter_mut()
            .find(|e| e.profile_id == entry.profile_id)
        {
            Some(existing) => *existing = entry,
            None => self.profiles.push(entry),
        }
        self.profiles
            .sort_by_key(|e| std::cmp::Reverse(e.updated_at));
    }

    /// Drops the entry for a profile, returning whether one was present.
    pub(crate) fn remove(&mut self, id: &ProfileId) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|e| e.profile_id != *id);
        self.profiles.len() != before
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }
}
