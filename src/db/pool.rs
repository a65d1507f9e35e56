//! The single SQLite connection behind an `EmotionStore`.

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

/// How long a statement waits on a file locked by another process
/// (a second `rfeelings` running `watch`, for instance).
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        log::debug!("Opened SQLite database {}", path);
        Ok(Self { conn })
    }

    /// Private database that lives as long as this pool.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn with_conn<F, T>(&mut self, func: F) -> T
    where
        F: FnOnce(&mut Connection) -> T,
    {
        func(&mut self.conn)
    }
}
