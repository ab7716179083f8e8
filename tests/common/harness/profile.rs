//! Builder for test profiles with sensible defaults.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use linknotes::domain::{ProfileId, ProfileNote, ProfileSnapshot, Tag};

/// Builder for creating seeded profile notes.
///
/// The display name defaults to the identifier and the timestamps to now.
#[derive(Debug)]
pub struct TestProfile {
    id: ProfileId,
    name: Option<String>,
    image: Option<String>,
    notes: String,
    tags: Vec<Tag>,
    at: DateTime<Utc>,
}

impl TestProfile {
    /// Creates a new test profile with the given identifier.
    pub fn new(id: &str) -> Self {
        Self {
            id: ProfileId::new(id).expect("Invalid ProfileId"),
            name: None,
            image: None,
            notes: String::new(),
            tags: Vec::new(),
            at: Utc::now(),
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the profile image URL.
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Sets the note text.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.push(Tag::new(tag.as_ref()).expect("Invalid tag"));
        self
    }

    /// Sets the time the note is saved at.
    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.at = at;
        self
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn saved_at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Converts to a domain note.
    pub fn to_note(&self) -> ProfileNote {
        let mut snapshot = ProfileSnapshot::from_id(self.id.clone());
        if let Some(name) = &self.name {
            snapshot.profile_name = name.clone();
        }
        if let Some(image) = &self.image {
            snapshot = snapshot.image_url(image);
        }
        ProfileNote::builder(&snapshot, self.at)
            .notes(self.notes.as_str())
            .tags(self.tags.clone())
            .build()
    }
}
