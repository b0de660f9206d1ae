// src/db/models.rs

//! Row models for the larder cache tables
//!
//! One struct per table with create/read/delete methods. Refresh always
//! goes through `delete_all` + `insert` inside a transaction (see
//! `repository::stores`), so there are no update methods here.

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::error::Result;
use crate::types::{Category, Ingredient, IngredientLine, Recipe};

/// A cached meal row
#[derive(Debug, Clone)]
pub struct MealRecord {
    pub id: Option<i64>,
    pub meal_id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub thumbnail: Option<String>,
    pub instructions: Option<String>,
    pub youtube: Option<String>,
    /// JSON array of ingredient lines
    pub ingredients: String,
}

impl MealRecord {
    /// Build a row from a domain recipe
    pub fn from_recipe(recipe: &Recipe) -> Result<Self> {
        Ok(Self {
            id: None,
            meal_id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            thumbnail: recipe.thumbnail.clone(),
            instructions: recipe.instructions.clone(),
            youtube: recipe.youtube.clone(),
            ingredients: serde_json::to_string(&recipe.ingredients)?,
        })
    }

    /// Convert back to the domain shape
    pub fn into_recipe(self) -> Result<Recipe> {
        let ingredients: Vec<IngredientLine> = serde_json::from_str(&self.ingredients)?;
        Ok(Recipe {
            id: self.meal_id,
            name: self.name,
            category: self.category,
            area: self.area,
            thumbnail: self.thumbnail,
            instructions: self.instructions,
            youtube: self.youtube,
            ingredients,
        })
    }

    /// Insert this meal into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO meals (meal_id, name, category, area, thumbnail, instructions, youtube, ingredients)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &self.meal_id,
                &self.name,
                &self.category,
                &self.area,
                &self.thumbnail,
                &self.instructions,
                &self.youtube,
                &self.ingredients,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// List all cached meals in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, meal_id, name, category, area, thumbnail, instructions, youtube, ingredients
             FROM meals ORDER BY id",
        )?;

        let rows = stmt.query_map([], Self::from_row)?;
        let mut meals = Vec::new();
        for row in rows {
            meals.push(row?);
        }
        Ok(meals)
    }

    /// Delete all cached meals, returning the number removed
    pub fn delete_all(conn: &Connection) -> Result<usize> {
        let deleted = conn.execute("DELETE FROM meals", [])?;
        Ok(deleted)
    }

    /// Number of cached meals
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM meals", [], |row| row.get(0))?;
        Ok(count)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            meal_id: row.get(1)?,
            name: row.get(2)?,
            category: row.get(3)?,
            area: row.get(4)?,
            thumbnail: row.get(5)?,
            instructions: row.get(6)?,
            youtube: row.get(7)?,
            ingredients: row.get(8)?,
        })
    }
}

/// A cached category row
#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub id: Option<i64>,
    pub category_id: Option<String>,
    pub name: String,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

impl CategoryRecord {
    /// Create a new category row
    pub fn new(name: String) -> Self {
        Self {
            id: None,
            category_id: None,
            name,
            thumbnail: None,
            description: None,
        }
    }

    pub fn from_category(category: &Category) -> Self {
        Self {
            id: None,
            category_id: category.id.clone(),
            name: category.name.clone(),
            thumbnail: category.thumbnail.clone(),
            description: category.description.clone(),
        }
    }

    pub fn into_category(self) -> Category {
        Category {
            id: self.category_id,
            name: self.name,
            thumbnail: self.thumbnail,
            description: self.description,
        }
    }

    /// Insert this category into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO categories (category_id, name, thumbnail, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                &self.category_id,
                &self.name,
                &self.thumbnail,
                &self.description,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// List all cached categories in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, category_id, name, thumbnail, description FROM categories ORDER BY id",
        )?;

        let rows = stmt.query_map([], Self::from_row)?;
        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    pub fn delete_all(conn: &Connection) -> Result<usize> {
        let deleted = conn.execute("DELETE FROM categories", [])?;
        Ok(deleted)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            category_id: row.get(1)?,
            name: row.get(2)?,
            thumbnail: row.get(3)?,
            description: row.get(4)?,
        })
    }
}

/// A cached catalog ingredient row
#[derive(Debug, Clone)]
pub struct IngredientRecord {
    pub id: Option<i64>,
    pub ingredient_id: Option<String>,
    pub name: String,
    pub kind: Option<String>,
    pub description: Option<String>,
}

impl IngredientRecord {
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            id: None,
            ingredient_id: ingredient.id.clone(),
            name: ingredient.name.clone(),
            kind: ingredient.kind.clone(),
            description: ingredient.description.clone(),
        }
    }

    pub fn into_ingredient(self) -> Ingredient {
        Ingredient {
            id: self.ingredient_id,
            name: self.name,
            kind: self.kind,
            description: self.description,
        }
    }

    /// Insert this ingredient into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (ingredient_id, name, type, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                &self.ingredient_id,
                &self.name,
                &self.kind,
                &self.description,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// List all cached ingredients in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, ingredient_id, name, type, description FROM ingredients ORDER BY id",
        )?;

        let rows = stmt.query_map([], Self::from_row)?;
        let mut ingredients = Vec::new();
        for row in rows {
            ingredients.push(row?);
        }
        Ok(ingredients)
    }

    pub fn delete_all(conn: &Connection) -> Result<usize> {
        let deleted = conn.execute("DELETE FROM ingredients", [])?;
        Ok(deleted)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM ingredients", [], |row| row.get(0))?;
        Ok(count)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            ingredient_id: row.get(1)?,
            name: row.get(2)?,
            kind: row.get(3)?,
            description: row.get(4)?,
        })
    }
}

/// Last successful refresh timestamp per entity
#[derive(Debug, Clone)]
pub struct SyncState {
    pub entity: String,
    /// RFC 3339 timestamp
    pub last_synced_at: String,
}

impl SyncState {
    /// Record a refresh for `entity`, replacing any previous timestamp
    pub fn record(conn: &Connection, entity: &str, timestamp: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO sync_state (entity, last_synced_at) VALUES (?1, ?2)
             ON CONFLICT(entity) DO UPDATE SET last_synced_at = excluded.last_synced_at",
            params![entity, timestamp],
        )?;
        Ok(())
    }

    /// Look up the last refresh for `entity`
    pub fn find(conn: &Connection, entity: &str) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT entity, last_synced_at FROM sync_state WHERE entity = ?1")?;

        let state = stmt
            .query_row([entity], |row| {
                Ok(Self {
                    entity: row.get(0)?,
                    last_synced_at: row.get(1)?,
                })
            })
            .optional()?;

        Ok(state)
    }
}
