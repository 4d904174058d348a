//! The Store: one SQLite connection, opened once and passed by reference.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Default number of rows returned by [`Store::list_events`].
pub const DEFAULT_EVENT_LIMIT: usize = 300;

/// Default number of rows returned by [`Store::recent_events`].
pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub struct Store {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::configure(conn, Some(path.to_path_buf()))
    }

    /// Private in-memory database, mostly for tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn, None)
    }

    fn configure(conn: Connection, path: Option<PathBuf>) -> AppResult<Self> {
        // journal_mode answers with the resulting mode ("memory" for :memory:)
        let _mode: String = conn.query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))?;
        conn.execute_batch(
            "PRAGMA synchronous=NORMAL;
             PRAGMA foreign_keys=ON;",
        )?;

        init_db(&conn)?;

        Ok(Self { conn, path })
    }

    /// Raw connection, for maintenance commands.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Database file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
