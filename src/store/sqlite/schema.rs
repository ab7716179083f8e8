//! SQLite schema for the key-value store.

use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Current schema version written to `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the store schema.
///
/// Idempotent: calling it on an existing database is safe. Runs in an
/// immediate transaction so connections opening the same file at once record
/// the version exactly once.
///
/// # Tables Created
/// - `kv` - One row per key, value stored as JSON text
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    tx.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        );",
    )?;

    let rows: i64 = tx.query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))?;
    if rows == 0 {
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [SCHEMA_VERSION],
        )?;
    }

    tx.commit()
}

/// Returns the schema version recorded in the database.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get(0)
    })
}
