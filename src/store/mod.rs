//! Key-value storage backends for note records and the notes index.
//!
//! Values are structured JSON documents keyed by string. Every backend also
//! offers an atomic section so that a read-modify-write cycle spanning several
//! keys is applied all-or-nothing and cannot interleave with another writer.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, Transaction};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A value could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored value does not decode to the expected record.
    #[error("corrupt value under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A durable string-keyed store of structured values.
///
/// Absent keys are not errors: `get` returns `None` and `remove` is a no-op.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Removes `key` (idempotent).
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Runs `f` as one atomic section.
    ///
    /// Writers are serialized for the duration of the section. If `f` returns
    /// an error, every write it made is discarded. Sections entered from
    /// inside a section join the outer one.
    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        Self: Sized,
        E: From<StoreError>,
        F: FnOnce(&Self) -> Result<T, E>;

    /// Reads and decodes the record stored under `key`.
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Encodes and stores `record` under `key`.
    fn set_as<T: Serialize>(&self, key: &str, record: &T) -> StoreResult<()>
    where
        Self: Sized,
    {
        self.set(key, serde_json::to_value(record)?)
    }
}
