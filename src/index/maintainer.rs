//! Owns every read-modify-write cycle on the notes index.

use super::entry::{IndexEntry, NotesIndex};
use crate::domain::{ProfileId, ProfileNote};
use crate::store::{KeyValueStore, StoreResult};

/// Storage key of the singleton index document.
pub const INDEX_KEY: &str = "linkedin-notes-index";

/// Keeps the index document in step with note records.
///
/// Each mutation loads the index, changes it and writes it back inside one
/// atomic section of the underlying store, so concurrent writers cannot drop
/// each other's changes.
pub struct IndexMaintainer<'s, S> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> IndexMaintainer<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Loads the index, or an empty one if none was ever written.
    pub fn load(&self) -> StoreResult<NotesIndex> {
        Ok(self.store.get_as(INDEX_KEY)?.unwrap_or_default())
    }

    /// Inserts or refreshes the entry for `note`.
    pub fn upsert(&self, note: &ProfileNote) -> StoreResult<()> {
        let entry = IndexEntry::from_note(note);
        self.modify(|index| {
            index.upsert(entry);
            true
        })?;
        Ok(())
    }

    /// Removes the entry for `id`, returning whether one was present.
    ///
    /// Nothing is written when no entry matched.
    pub fn remove(&self, id: &ProfileId) -> StoreResult<bool> {
        self.modify(|index| index.remove(id))
    }

    /// Runs `f` against the current index and persists it if `f` reports a
    /// change.
    pub fn modify<F>(&self, f: F) -> StoreResult<bool>
    where
        F: FnOnce(&mut NotesIndex) -> bool,
    {
        self.store.atomically(|store| {
            let mut index: NotesIndex = store.get_as(INDEX_KEY)?.unwrap_or_default();
            if !f(&mut index) {
                return Ok(false);
            }
            index.bump_revision();
            store.set_as(INDEX_KEY, &index)?;
            tracing::trace!(
                revision = index.revision(),
                entries = index.len(),
                "index written"
            );
            Ok(true)
        })
    }
}
