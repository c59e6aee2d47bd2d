//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // A second driplet process should wait briefly instead of failing
        // with SQLITE_BUSY.
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
