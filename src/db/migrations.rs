// src/db/migrations.rs

//! Database migration implementations
//!
//! Individual migration functions for evolving the larder cache schema.
//! Each migration function handles a specific version upgrade.

use rusqlite::Connection;
use tracing::debug;

use crate::error::Result;

/// Initial schema - Version 1
///
/// Creates the cache tables:
/// - meals: full recipe records with the ingredient list as a JSON column
/// - categories: the category listing
/// - ingredients: the browsable catalog ingredient listing
/// - sync_state: last successful refresh timestamp per entity
pub fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        -- Meals: one row per recipe, replaced wholesale on refresh
        CREATE TABLE meals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            meal_id TEXT,
            name TEXT,
            category TEXT,
            area TEXT,
            thumbnail TEXT,
            instructions TEXT,
            youtube TEXT,
            -- JSON array of {name, measure} pairs, blank slots removed
            ingredients TEXT NOT NULL DEFAULT '[]'
        );

        CREATE INDEX idx_meals_name ON meals(name);
        CREATE INDEX idx_meals_category ON meals(category);

        -- Categories: the category listing
        CREATE TABLE categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id TEXT,
            name TEXT NOT NULL,
            thumbnail TEXT,
            description TEXT
        );

        -- Ingredients: the browsable ingredient catalog
        CREATE TABLE ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ingredient_id TEXT,
            name TEXT NOT NULL,
            type TEXT,
            description TEXT
        );

        -- Sync state: last successful refresh per entity
        CREATE TABLE sync_state (
            entity TEXT PRIMARY KEY,
            last_synced_at TEXT NOT NULL
        );
        ",
    )?;

    Ok(())
}
