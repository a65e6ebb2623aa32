use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "tasks.db";

/// Owner of the single database connection used for the process lifetime.
///
/// The connection is released when the `Db` (or the store that took it
/// over) is dropped.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the default data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Self::open(db_file_path)?)
    }

    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Db> {
        let conn = Connection::open(path)?;
        Self::configure(conn)
    }

    pub fn in_memory() -> rusqlite::Result<Db> {
        Self::configure(Connection::open_in_memory()?)
    }

    // A lock held by another process must surface as an error right away,
    // not after a silent wait-and-retry.
    fn configure(conn: Connection) -> rusqlite::Result<Db> {
        conn.busy_timeout(Duration::ZERO)?;
        Ok(Db { conn })
    }
}
