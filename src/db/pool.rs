//! Shared SQLite handle.
//!
//! One connection behind one mutex: every ledger mutation and every snapshot
//! read takes the lock, so writes are serialized and a reader sees either the
//! state before or after a mutation, never in between.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct DbPool {
    conn: Arc<Mutex<Connection>>,
}

impl DbPool {
    /// Open the database file without touching the schema.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self::from_connection(conn))
    }

    /// Open the database file and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        pool.with_conn(|conn| init_db(conn))?;
        Ok(pool)
    }

    /// Fresh in-memory database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let pool = Self::from_connection(Connection::open_in_memory()?);
        pool.with_conn(|conn| init_db(conn))?;
        Ok(pool)
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run a closure with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        let mut guard = self
            .conn
            .lock()
            .map_err(|_| AppError::Other("database lock poisoned".into()))?;
        func(&mut guard)
    }
}
