// src/repository/stores.rs

//! SQLite-backed cache stores
//!
//! One [`CacheStore`] implementation per entity type, each mapping
//! between the domain shape and its row model at this boundary. Refresh
//! is delete-all + reinsert inside a single transaction, which also
//! records the sync timestamp for the entity.

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::db::{self, models};
use crate::error::{Error, Result};
use crate::types::{Category, Ingredient, Recipe};

use super::fallback::CacheStore;

/// Entity name for the meals table in `sync_state`
pub const ENTITY_MEALS: &str = "meals";
/// Entity name for the categories table in `sync_state`
pub const ENTITY_CATEGORIES: &str = "categories";
/// Entity name for the ingredients table in `sync_state`
pub const ENTITY_INGREDIENTS: &str = "ingredients";

/// Current time as an RFC 3339 string, as stored in `sync_state`
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Parse an RFC 3339 timestamp to Unix seconds
pub fn parse_timestamp(timestamp: &str) -> Result<i64> {
    let dt = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| Error::ParseError(format!("Invalid timestamp: {e}")))?;
    Ok(dt.timestamp())
}

/// Cache store for meal rows
pub struct MealStore<'a> {
    conn: &'a mut Connection,
}

impl<'a> MealStore<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }
}

impl CacheStore for MealStore<'_> {
    type Item = Recipe;

    fn get_all(&self) -> Result<Vec<Recipe>> {
        models::MealRecord::list_all(&*self.conn)?
            .into_iter()
            .map(models::MealRecord::into_recipe)
            .collect()
    }

    fn insert_all(&mut self, items: &[Recipe]) -> Result<()> {
        for recipe in items {
            models::MealRecord::from_recipe(recipe)?.insert(self.conn)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        models::MealRecord::delete_all(self.conn)?;
        Ok(())
    }

    fn replace_all(&mut self, items: &[Recipe]) -> Result<()> {
        let records: Result<Vec<models::MealRecord>> =
            items.iter().map(models::MealRecord::from_recipe).collect();
        let records = records?;

        db::transaction(self.conn, |tx| {
            models::MealRecord::delete_all(tx)?;
            for mut record in records {
                record.insert(tx)?;
            }
            models::SyncState::record(tx, ENTITY_MEALS, &current_timestamp())?;
            Ok(())
        })
    }
}

/// Cache store for category rows
pub struct CategoryStore<'a> {
    conn: &'a mut Connection,
}

impl<'a> CategoryStore<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }
}

impl CacheStore for CategoryStore<'_> {
    type Item = Category;

    fn get_all(&self) -> Result<Vec<Category>> {
        Ok(models::CategoryRecord::list_all(&*self.conn)?
            .into_iter()
            .map(models::CategoryRecord::into_category)
            .collect())
    }

    fn insert_all(&mut self, items: &[Category]) -> Result<()> {
        for category in items {
            models::CategoryRecord::from_category(category).insert(self.conn)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        models::CategoryRecord::delete_all(self.conn)?;
        Ok(())
    }

    fn replace_all(&mut self, items: &[Category]) -> Result<()> {
        let records: Vec<models::CategoryRecord> =
            items.iter().map(models::CategoryRecord::from_category).collect();

        db::transaction(self.conn, |tx| {
            models::CategoryRecord::delete_all(tx)?;
            for mut record in records {
                record.insert(tx)?;
            }
            models::SyncState::record(tx, ENTITY_CATEGORIES, &current_timestamp())?;
            Ok(())
        })
    }
}

/// Cache store for catalog ingredient rows
pub struct IngredientStore<'a> {
    conn: &'a mut Connection,
}

impl<'a> IngredientStore<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }
}

impl CacheStore for IngredientStore<'_> {
    type Item = Ingredient;

    fn get_all(&self) -> Result<Vec<Ingredient>> {
        Ok(models::IngredientRecord::list_all(&*self.conn)?
            .into_iter()
            .map(models::IngredientRecord::into_ingredient)
            .collect())
    }

    fn insert_all(&mut self, items: &[Ingredient]) -> Result<()> {
        for ingredient in items {
            models::IngredientRecord::from_ingredient(ingredient).insert(self.conn)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        models::IngredientRecord::delete_all(self.conn)?;
        Ok(())
    }

    fn replace_all(&mut self, items: &[Ingredient]) -> Result<()> {
        let records: Vec<models::IngredientRecord> = items
            .iter()
            .map(models::IngredientRecord::from_ingredient)
            .collect();

        db::transaction(self.conn, |tx| {
            models::IngredientRecord::delete_all(tx)?;
            for mut record in records {
                record.insert(tx)?;
            }
            models::SyncState::record(tx, ENTITY_INGREDIENTS, &current_timestamp())?;
            Ok(())
        })
    }
}
