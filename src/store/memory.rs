//! In-process key-value store.

use super::{KeyValueStore, StoreError, StoreResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

/// A key-value store held in memory.
///
/// Atomic sections take a writer lock and snapshot the map; a failed section
/// restores the snapshot. Writes outside a section take the same lock, so a
/// rollback never discards another thread's write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Value>>,
    writer: Mutex<()>,
    owner: Mutex<Option<ThreadId>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn owned_by_current_thread(&self) -> bool {
        *self.owner.lock().unwrap_or_else(PoisonError::into_inner) == Some(thread::current().id())
    }

    /// Applies a single write, waiting for any other thread's open section.
    fn write<R>(&self, f: impl FnOnce(&mut BTreeMap<String, Value>) -> R) -> R {
        if self.owned_by_current_thread() {
            return f(&mut self.entries());
        }
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut self.entries())
    }
}

/// Clears section ownership even if the section panics.
struct OwnerGuard<'a> {
    owner: &'a Mutex<Option<ThreadId>>,
}

impl<'a> OwnerGuard<'a> {
    fn claim(owner: &'a Mutex<Option<ThreadId>>) -> Self {
        *owner.lock().unwrap_or_else(PoisonError::into_inner) = Some(thread::current().id());
        Self { owner }
    }
}

impl Drop for OwnerGuard<'_> {
    fn drop(&mut self) {
        *self.owner.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        self.write(|entries| entries.insert(key.to_string(), value));
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.write(|entries| entries.remove(key));
        Ok(())
    }

    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&Self) -> Result<T, E>,
    {
        if self.owned_by_current_thread() {
            return f(self);
        }

        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _owner = OwnerGuard::claim(&self.owner);
        let snapshot = self.entries().clone();

        let result = f(self);
        if result.is_err() {
            *self.entries() = snapshot;
        }
        result
    }
}
