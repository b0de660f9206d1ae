// src/db/schema.rs

//! Database schema definitions and migrations for larder
//!
//! Defines the SQLite schema for the cache tables and provides a
//! migration system to evolve the schema over time.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::Result;

use super::migrations;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the schema version tracking table
fn init_schema_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    init_schema_version(conn)?;

    let version = conn
        .query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Apply all pending migrations
pub fn migrate(conn: &Connection) -> Result<()> {
    let current = get_schema_version(conn)?;
    debug!("Database schema version: {}", current);

    if current < 1 {
        info!("Applying schema migration to version 1");
        migrations::migrate_v1(conn)?;
        set_schema_version(conn, 1)?;
    }

    Ok(())
}
