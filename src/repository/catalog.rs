// src/repository/catalog.rs

//! Catalog facade: API client + cache database per entity type
//!
//! `Catalog` wires the three read-through instantiations together and
//! adds the explicit refresh used by `larder sync` (which, unlike a
//! read-through fetch, fails when the remote fails).

use rusqlite::Connection;
use tracing::info;

use crate::db::{self, models};
use crate::error::Result;
use crate::remote::ApiClient;
use crate::types::{Category, Ingredient, Recipe};

use super::fallback::{CacheStore, RemoteSource, fetch_with_fallback};
use super::stores::{
    CategoryStore, ENTITY_CATEGORIES, ENTITY_INGREDIENTS, ENTITY_MEALS, IngredientStore, MealStore,
};

struct MealsEndpoint<'a>(&'a ApiClient);

impl RemoteSource for MealsEndpoint<'_> {
    type Item = Recipe;

    fn fetch_all(&self) -> Result<Vec<Recipe>> {
        self.0.fetch_meals()
    }
}

struct CategoriesEndpoint<'a>(&'a ApiClient);

impl RemoteSource for CategoriesEndpoint<'_> {
    type Item = Category;

    fn fetch_all(&self) -> Result<Vec<Category>> {
        self.0.fetch_categories()
    }
}

struct IngredientsEndpoint<'a>(&'a ApiClient);

impl RemoteSource for IngredientsEndpoint<'_> {
    type Item = Ingredient;

    fn fetch_all(&self) -> Result<Vec<Ingredient>> {
        self.0.fetch_ingredients()
    }
}

/// Per-entity counts from an explicit refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub meals: usize,
    pub categories: usize,
    pub ingredients: usize,
}

/// Cache state for one entity, as shown by `larder status`
#[derive(Debug, Clone)]
pub struct EntityStatus {
    pub entity: &'static str,
    pub rows: i64,
    pub last_synced_at: Option<String>,
}

/// The meal catalog: remote API plus local cache
pub struct Catalog {
    client: ApiClient,
    conn: Connection,
}

impl Catalog {
    /// Open the cache database and bind the API client
    pub fn open(db_path: &str, api_url: &str) -> Result<Self> {
        let client = ApiClient::new(api_url)?;
        let conn = db::open(db_path)?;
        Ok(Self { client, conn })
    }

    /// Meals, remote-first with cache fallback
    pub fn meals(&mut self) -> Result<Vec<Recipe>> {
        fetch_with_fallback(
            &MealsEndpoint(&self.client),
            &mut MealStore::new(&mut self.conn),
        )
    }

    /// Categories, remote-first with cache fallback
    pub fn categories(&mut self) -> Result<Vec<Category>> {
        fetch_with_fallback(
            &CategoriesEndpoint(&self.client),
            &mut CategoryStore::new(&mut self.conn),
        )
    }

    /// Catalog ingredients, remote-first with cache fallback
    pub fn ingredients(&mut self) -> Result<Vec<Ingredient>> {
        fetch_with_fallback(
            &IngredientsEndpoint(&self.client),
            &mut IngredientStore::new(&mut self.conn),
        )
    }

    /// Force-refresh every entity cache from the remote API.
    ///
    /// This is the `sync` command path: remote failures are errors here,
    /// there is nothing to fall back to when the user asked for fresh
    /// data.
    pub fn refresh_all(&mut self) -> Result<SyncReport> {
        let meals = self.client.fetch_meals()?;
        MealStore::new(&mut self.conn).replace_all(&meals)?;

        let categories = self.client.fetch_categories()?;
        CategoryStore::new(&mut self.conn).replace_all(&categories)?;

        let ingredients = self.client.fetch_ingredients()?;
        IngredientStore::new(&mut self.conn).replace_all(&ingredients)?;

        info!(
            "Synced {} meals, {} categories, {} ingredients",
            meals.len(),
            categories.len(),
            ingredients.len()
        );

        Ok(SyncReport {
            meals: meals.len(),
            categories: categories.len(),
            ingredients: ingredients.len(),
        })
    }

    /// Row counts and last-sync timestamps per entity
    pub fn status(&self) -> Result<Vec<EntityStatus>> {
        cache_status(&self.conn)
    }
}

/// Row counts and last-sync timestamps for every cache table
pub fn cache_status(conn: &Connection) -> Result<Vec<EntityStatus>> {
    Ok(vec![
        EntityStatus {
            entity: ENTITY_MEALS,
            rows: models::MealRecord::count(conn)?,
            last_synced_at: models::SyncState::find(conn, ENTITY_MEALS)?
                .map(|s| s.last_synced_at),
        },
        EntityStatus {
            entity: ENTITY_CATEGORIES,
            rows: models::CategoryRecord::count(conn)?,
            last_synced_at: models::SyncState::find(conn, ENTITY_CATEGORIES)?
                .map(|s| s.last_synced_at),
        },
        EntityStatus {
            entity: ENTITY_INGREDIENTS,
            rows: models::IngredientRecord::count(conn)?,
            last_synced_at: models::SyncState::find(conn, ENTITY_INGREDIENTS)?
                .map(|s| s.last_synced_at),
        },
    ])
}
