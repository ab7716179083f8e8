//! SQLite-backed key-value store.

mod connection;
mod schema;
mod transaction;


use super::{KeyValueStore, StoreError, StoreResult};
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;

pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed key-value store.
///
/// All keys live in a single `kv` table with JSON-encoded values. Atomic
/// sections run inside `BEGIN IMMEDIATE`, so concurrent writers from other
/// processes wait for the database write lock instead of overwriting each
/// other.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let text = serde_json::to_string(&value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, text],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&Self) -> Result<T, E>,
    {
        if !self.conn.is_autocommit() {
            return f(self);
        }

        let tx = self.transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }
}
