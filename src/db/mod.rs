// src/db/mod.rs

//! SQLite cache database
//!
//! Connection lifecycle helpers plus the schema and row models. The cache
//! holds the last successfully fetched copy of each remote collection and
//! is fully replaced on every refresh; it is never partially updated.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::info;

use crate::error::Result;

pub mod models;
pub mod schema;

mod migrations;

/// Default database path: `<platform data dir>/larder/larder.db`
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("larder")
        .join("larder.db")
}

/// Create the database (and its parent directory) and apply migrations
pub fn init(db_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(db_path)?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    schema::migrate(&conn)?;

    info!("Initialized database at {}", db_path);
    Ok(())
}

/// Open an existing database, applying any pending migrations
pub fn open(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Run `f` inside a transaction, committing on success
pub fn transaction<T>(
    conn: &mut Connection,
    f: impl FnOnce(&Connection) -> Result<T>,
) -> Result<T> {
    let tx = conn.transaction()?;
    let result = f(&tx)?;
    tx.commit()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_init_and_open() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();
        drop(temp_file);

        init(&db_path).unwrap();
        let conn = open(&db_path).unwrap();
        assert_eq!(schema::get_schema_version(&conn).unwrap(), schema::SCHEMA_VERSION);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();
        drop(temp_file);

        init(&db_path).unwrap();
        let mut conn = open(&db_path).unwrap();

        let result: Result<()> = transaction(&mut conn, |tx| {
            let mut record = models::CategoryRecord::new("Dessert".to_string());
            record.insert(tx)?;
            Err(crate::error::Error::InitError("boom".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(models::CategoryRecord::count(&conn).unwrap(), 0);
    }
}
