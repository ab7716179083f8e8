//! Note record repository and the read-only façade over the index.
//!
//! Records live under `note:<profileId>`; the index under
//! [`INDEX_KEY`](crate::index::INDEX_KEY). Every mutation writes the record
//! and the index inside one atomic section of the store, so the two never
//! diverge through a half-finished save or delete.


use crate::domain::{ProfileId, ProfileNote, ProfileSnapshot, Tag};
use crate::index::{
    EntryQuery, IndexEntry, IndexMaintainer, NotesIndex, TagWithCount, list_all_tags, tag_counts,
};
use crate::infra::{Clock, SystemClock};
use crate::store::{KeyValueStore, StoreResult};

/// Prefix of the storage key of every note record.
pub const NOTE_KEY_PREFIX: &str = "note:";

/// Returns the storage key of a profile's note record.
pub fn note_key(id: &ProfileId) -> String {
    format!("{}{}", NOTE_KEY_PREFIX, id)
}

/// What a save did.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The note was written and indexed; carries the stored record.
    Saved(ProfileNote),
    /// The note was trivial, so any stored record was deleted instead.
    Removed { existed: bool },
    /// An edit left the stored note as it was; nothing was written.
    Unchanged(ProfileNote),
}

/// Result of exporting every indexed note.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    /// Full notes in index order, most recently updated first.
    pub notes: Vec<ProfileNote>,
    /// Index entries dropped because their record was missing.
    pub repaired: usize,
}

/// Reads and writes profile notes, keeping the notes index consistent.
pub struct NoteRepository<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore> NoteRepository<S> {
    /// Creates a repository stamping saves with wall-clock time.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> NoteRepository<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the clock that stamps saves.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ===========================================
    // Records
    // ===========================================

    /// Fetches the note for a profile, if one is saved.
    pub fn get(&self, id: &ProfileId) -> StoreResult<Option<ProfileNote>> {
        self.store.get_as(&note_key(id))
    }

    /// Saves a note and refreshes its index entry.
    ///
    /// `updated_at` is stamped with the current time (never earlier than the
    /// stored record's) and `created_at` is kept from the stored record. A
    /// trivial note is not stored: the save deletes any existing record.
    pub fn save(&self, mut note: ProfileNote) -> StoreResult<SaveOutcome> {
        if note.is_trivial() {
            let existed = self.delete(note.profile_id())?;
            return Ok(SaveOutcome::Removed { existed });
        }

        let key = note_key(note.profile_id());
        let now = self.clock.now();
        self.store.atomically(|store| {
            let stored: Option<ProfileNote> = store.get_as(&key)?;
            note.stamp_save(now, stored.as_ref());
            store.set_as(&key, &note)?;
            IndexMaintainer::new(store).upsert(&note)?;
            tracing::debug!(
                profile_id = %note.profile_id(),
                tags = note.tags().len(),
                created = stored.is_none(),
                "note saved"
            );
            Ok(SaveOutcome::Saved(note))
        })
    }

    /// Deletes a profile's note and its index entry.
    ///
    /// Idempotent; returns whether a record or entry was present.
    pub fn delete(&self, id: &ProfileId) -> StoreResult<bool> {
        let key = note_key(id);
        self.store.atomically(|store| {
            let had_record = store.get(&key)?.is_some();
            if had_record {
                store.remove(&key)?;
            }
            let had_entry = IndexMaintainer::new(store).remove(id)?;
            if had_record || had_entry {
                tracing::debug!(profile_id = %id, "note deleted");
            }
            Ok(had_record || had_entry)
        })
    }

    /// Loads (or starts) the note for a profile, applies `f` and saves it.
    ///
    /// Display metadata is refreshed from `snapshot`. When neither the refresh
    /// nor `f` changes a stored note, nothing is written and
    /// [`SaveOutcome::Unchanged`] is returned. The whole cycle is one atomic
    /// section, so concurrent edits are applied one after the other.
    pub fn edit<F>(&self, snapshot: &ProfileSnapshot, f: F) -> StoreResult<SaveOutcome>
    where
        F: FnOnce(&mut ProfileNote),
    {
        self.store.atomically(|_| {
            let stored = self.get(&snapshot.profile_id)?;
            let mut note = match &stored {
                Some(existing) => {
                    let mut note = existing.clone();
                    note.refresh_profile(snapshot);
                    note
                }
                None => ProfileNote::new(snapshot, self.clock.now()),
            };
            f(&mut note);

            if stored.as_ref() == Some(&note) {
                tracing::debug!(profile_id = %note.profile_id(), "edit changed nothing");
                return Ok(SaveOutcome::Unchanged(note));
            }
            self.save(note)
        })
    }

    /// Adds tags to a profile's note. Tags already present are skipped; if all
    /// of them are, the note is left untouched.
    pub fn add_tags(&self, snapshot: &ProfileSnapshot, tags: &[Tag]) -> StoreResult<SaveOutcome> {
        self.edit(snapshot, |note| {
            for tag in tags {
                note.add_tag(tag.clone());
            }
        })
    }

    /// Removes tags from a profile's note, deleting it if nothing remains.
    /// Tags the note does not carry are ignored.
    pub fn remove_tags(&self, snapshot: &ProfileSnapshot, tags: &[Tag]) -> StoreResult<SaveOutcome> {
        self.edit(snapshot, |note| {
            for tag in tags {
                note.remove_tag(tag);
            }
        })
    }

    // ===========================================
    // Index Queries
    // ===========================================

    /// Loads the notes index.
    pub fn index(&self) -> StoreResult<NotesIndex> {
        IndexMaintainer::new(&self.store).load()
    }

    /// Returns the number of saved notes.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.index()?.len())
    }

    /// Returns every distinct tag, sorted ascending.
    pub fn list_all_tags(&self) -> StoreResult<Vec<Tag>> {
        Ok(list_all_tags(&self.index()?))
    }

    /// Returns every distinct tag with its usage count.
    pub fn tag_counts(&self) -> StoreResult<Vec<TagWithCount>> {
        Ok(tag_counts(&self.index()?))
    }

    /// Returns the index entries matching `query`, in index order.
    ///
    /// Free-text queries search the full note text of each candidate.
    pub fn search(&self, query: &EntryQuery) -> StoreResult<Vec<IndexEntry>> {
        let index = self.index()?;
        let mut matches = Vec::new();
        for entry in index.profiles() {
            let text = if query.needs_note_text() {
                self.get(entry.profile_id())?.map(|n| n.notes().to_string())
            } else {
                None
            };
            if query.matches(entry, text.as_deref()) {
                matches.push(entry.clone());
            }
        }
        Ok(matches)
    }

    // ===========================================
    // Export & Repair
    // ===========================================

    /// Loads the full note behind every index entry.
    ///
    /// Entries whose record is missing are removed from the index and counted
    /// in [`ExportReport::repaired`].
    pub fn export_all(&self) -> StoreResult<ExportReport> {
        let index = self.index()?;
        let mut notes = Vec::with_capacity(index.len());
        let mut dangling = Vec::new();
        for entry in index.profiles() {
            match self.get(entry.profile_id())? {
                Some(note) => notes.push(note),
                None => dangling.push(entry.profile_id().clone()),
            }
        }

        let repaired = self.repair(&dangling)?;
        Ok(ExportReport { notes, repaired })
    }

    /// Drops index entries whose record is missing; returns how many.
    pub fn reconcile(&self) -> StoreResult<usize> {
        let index = self.index()?;
        let mut dangling = Vec::new();
        for entry in index.profiles() {
            if self.store.get(&note_key(entry.profile_id()))?.is_none() {
                dangling.push(entry.profile_id().clone());
            }
        }
        self.repair(&dangling)
    }

    fn repair(&self, dangling: &[ProfileId]) -> StoreResult<usize> {
        if dangling.is_empty() {
            return Ok(0);
        }

        self.store.atomically(|store| {
            // A record may have been written since the scan.
            let mut missing = Vec::new();
            for id in dangling {
                if store.get(&note_key(id))?.is_none() {
                    missing.push(id);
                }
            }

            let mut repaired = 0;
            IndexMaintainer::new(store).modify(|index| {
                for id in &missing {
                    if index.remove(id) {
                        tracing::warn!(profile_id = %id, "removed index entry with no note record");
                        repaired += 1;
                    }
                }
                repaired > 0
            })?;
            Ok(repaired)
        })
    }
}
