//! Embedded SQLite storage for todo items.
//!
//! One table, two statements: insert a row, list all rows. The connection is
//! owned by [`TodoStore`] and handed to the HTTP layer as an explicit
//! dependency, so tests can run against an in-memory database.

#![forbid(unsafe_code)]

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),

    /// An inserted row could not be read back by its rowid.
    #[error("inserted row missing (id={0})")]
    RowMissing(i64),
}

/// A persisted todo item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoRow {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

/// Handle to the embedded todo database.
#[derive(Debug)]
pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Opens (creating if absent) the database file at `path` and ensures
    /// the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Opens a private in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        // AUTOINCREMENT keeps ids strictly increasing and never reused,
        // including across restarts.
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;

            CREATE TABLE IF NOT EXISTS todos (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              text TEXT NOT NULL,
              completed INTEGER DEFAULT 0
            );
            "#,
        )?;
        Ok(())
    }

    /// Inserts a todo with the given text (stored verbatim, untrimmed) and
    /// returns the row as persisted, `completed` defaulted to false.
    pub fn insert_todo(&self, text: &str) -> Result<TodoRow, StoreError> {
        self.conn
            .execute("INSERT INTO todos (text) VALUES (?1)", params![text])?;
        let id = self.conn.last_insert_rowid();
        self.get_todo(id)?.ok_or(StoreError::RowMissing(id))
    }

    /// Returns all todos in ascending id order.
    pub fn list_todos(&self) -> Result<Vec<TodoRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text, completed FROM todos ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(TodoRow {
                id: row.get(0)?,
                text: row.get(1)?,
                completed: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Looks up a single todo by id.
    pub fn get_todo(&self, id: i64) -> Result<Option<TodoRow>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, text, completed FROM todos WHERE id = ?1",
                params![id],
                |row| {
                    Ok(TodoRow {
                        id: row.get(0)?,
                        text: row.get(1)?,
                        completed: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(StoreError::from)
    }
}
