//! Storage backends
//!
//! Raw key/value string storage. The in-memory backend backs tests and
//! throwaway sessions; the SQLite backend is the durable local store.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection, OpenFlags};
use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Raw key/value storage for JSON blobs
pub trait StorageBackend {
    /// Read the raw value under `key`, None when absent
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// HashMap-backed storage, nothing survives the session
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// SQLite-backed storage: one table, one row per key
///
/// A single connection is enough; the data model assumes a single local
/// writer at a time.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open or create the store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        Self::init(conn)
    }

    /// An in-memory store, for tests
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             CREATE TABLE IF NOT EXISTS kv (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL,
                 updated_at TEXT NOT NULL DEFAULT (datetime('now'))
             );",
        )?;
        Ok(Self { conn })
    }
}

impl StorageBackend for SqliteBackend {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let result = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            });
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_get_set() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get_raw("k").unwrap(), None);
        backend.set_raw("k", "[1,2]").unwrap();
        assert_eq!(backend.get_raw("k").unwrap().as_deref(), Some("[1,2]"));
        backend.set_raw("k", "[3]").unwrap();
        assert_eq!(backend.get_raw("k").unwrap().as_deref(), Some("[3]"));
    }

    #[test]
    fn test_sqlite_backend_get_set() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        assert_eq!(backend.get_raw("k").unwrap(), None);
        backend.set_raw("k", "{\"a\":1}").unwrap();
        assert_eq!(backend.get_raw("k").unwrap().as_deref(), Some("{\"a\":1}"));
        backend.set_raw("k", "{\"a\":2}").unwrap();
        assert_eq!(backend.get_raw("k").unwrap().as_deref(), Some("{\"a\":2}"));
    }
}
