// src/repository/mod.rs

//! Read-through repository over the remote meal API and the local cache
//!
//! This module provides:
//! - The generic remote-first, cache-on-failure strategy
//! - SQLite-backed cache stores for meals, categories, and ingredients
//! - The `Catalog` facade the CLI commands talk to

mod catalog;
mod fallback;
mod stores;

pub use catalog::{Catalog, EntityStatus, SyncReport, cache_status};
pub use fallback::{CacheStore, RemoteSource, fetch_with_fallback};
pub use stores::{
    CategoryStore, ENTITY_CATEGORIES, ENTITY_INGREDIENTS, ENTITY_MEALS, IngredientStore, MealStore,
    current_timestamp, parse_timestamp,
};
