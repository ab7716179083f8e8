//! Profile note record and the scraped profile snapshot it is built from.

use crate::domain::{ProfileId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Display metadata scraped from a profile page.
///
/// Other scraped fields (such as the headline) are not kept and are ignored
/// when a snapshot is deserialized. Only presence is checked; freshness and correctness are up to the scraper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub profile_id: ProfileId,
    pub profile_name: String,
    pub profile_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl ProfileSnapshot {
    /// Creates a snapshot with the given display name and URL.
    pub fn new(
        profile_id: ProfileId,
        profile_name: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            profile_id,
            profile_name: profile_name.into(),
            profile_url: profile_url.into(),
            profile_image_url: None,
        }
    }

    /// Creates a placeholder snapshot when nothing but the identifier is known.
    ///
    /// The identifier doubles as the display name and the URL is the canonical
    /// profile URL.
    pub fn from_id(profile_id: ProfileId) -> Self {
        let name = profile_id.to_string();
        let url = profile_id.canonical_url();
        Self::new(profile_id, name, url)
    }

    /// Sets the profile image URL.
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = Some(url.into());
        self
    }
}

/// Private notes and tags saved for one profile.
///
/// A note only deserves a place in storage while it carries user content:
/// see [`ProfileNote::is_trivial`].
///
/// # Examples
///
/// ```
/// use linknotes::domain::{ProfileId, ProfileNote, ProfileSnapshot, Tag};
/// use chrono::Utc;
///
/// let id = ProfileId::new("alice").unwrap();
/// let mut note = ProfileNote::new(&ProfileSnapshot::from_id(id), Utc::now());
/// assert!(note.is_trivial());
///
/// assert!(note.add_tag(Tag::new("Recruiter").unwrap()));
/// assert!(!note.add_tag(Tag::new("recruiter").unwrap()));
/// assert!(!note.is_trivial());
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileNote {
    profile_id: ProfileId,
    profile_name: String,
    profile_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_image_url: Option<String>,
    #[serde(default)]
    notes: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileNote {
    /// Creates an empty note for a profile, created and updated at `now`.
    pub fn new(snapshot: &ProfileSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            profile_id: snapshot.profile_id.clone(),
            profile_name: snapshot.profile_name.clone(),
            profile_url: snapshot.profile_url.clone(),
            profile_image_url: snapshot.profile_image_url.clone(),
            notes: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a builder for constructing a note with content.
    pub fn builder(snapshot: &ProfileSnapshot, created_at: DateTime<Utc>) -> ProfileNoteBuilder {
        ProfileNoteBuilder {
            note: Self::new(snapshot, created_at),
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

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true when the note has no text and no tags.
    pub fn is_trivial(&self) -> bool {
        self.notes.trim().is_empty() && self.tags.is_empty()
    }

    /// Replaces the note text.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Adds a tag, returning false if it was already present.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes a tag, returning false if it was not present.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Replaces all tags, dropping duplicates while keeping first-seen order.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = deduplicate_tags(tags);
    }

    /// Overwrites the display metadata with a fresher snapshot.
    pub fn refresh_profile(&mut self, snapshot: &ProfileSnapshot) {
        self.profile_name = snapshot.profile_name.clone();
        self.profile_url = snapshot.profile_url.clone();
        if snapshot.profile_image_url.is_some() {
            self.profile_image_url = snapshot.profile_image_url.clone();
        }
    }

    /// Stamps a save happening at `now`.
    ///
    /// The creation time of the stored record is kept, and the update time
    /// never moves behind the stored one.
    pub(crate) fn stamp_save(&mut self, now: DateTime<Utc>, stored: Option<&ProfileNote>) {
        self.updated_at = now;
        if let Some(stored) = stored {
            self.created_at = stored.created_at;
            self.updated_at = self.updated_at.max(stored.updated_at);
        }
    }
}

impl fmt::Debug for ProfileNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileNote")
            .field("profile_id", &self.profile_id)
            .field("profile_name", &self.profile_name)
            .field("tags", &self.tags)
            .field("notes_len", &self.notes.len())
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Builder for constructing a ProfileNote.
pub struct ProfileNoteBuilder {
    note: ProfileNote,
}

impl ProfileNoteBuilder {
    /// Sets the note text.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.note.notes = notes.into();
        self
    }

    /// Sets the tags (deduplicated).
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.note.tags = deduplicate_tags(tags);
        self
    }

    /// Sets the last update time.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.note.updated_at = updated_at;
        self
    }

    pub fn build(self) -> ProfileNote {
        self.note
    }
}

fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Tag>::deserialize(deserializer).map(deduplicate_tags)
}
