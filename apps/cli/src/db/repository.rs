//! SQLite-backed word store.

use crate::db::error::DbError;
use crate::db::schema::{INIT_SCHEMA_VERSION, SCHEMA, SCHEMA_VERSION};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use vocab_core::WordStore;

type Result<T> = std::result::Result<T, DbError>;

/// SQLite implementation of the key-value store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating it and its directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        tracing::debug!(path = %path.display(), "opened word store");
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute(INIT_SCHEMA_VERSION, params![SCHEMA_VERSION])?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

impl WordStore for SqliteStore {
    fn get(&self, key: &str) -> vocab_core::Result<Option<String>> {
        self.read(key).map_err(Into::into)
    }

    fn set(&self, key: &str, value: &str) -> vocab_core::Result<()> {
        self.write(key, value).map_err(Into::into)
    }
}
