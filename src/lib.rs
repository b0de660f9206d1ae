// src/lib.rs

//! Larder
//!
//! Offline-first meal catalog: fetches meals, categories, and ingredients
//! from a remote API, caches them in SQLite, and serves them through a
//! read-through repository that falls back to the cache when the network
//! is unavailable. On top of the catalog sit two pure views: an
//! ingredient-basket matcher and a declarative meal filter.
//!
//! # Architecture
//!
//! - Remote-first reads: every lookup tries the API, refreshes the cache
//!   on success, and serves cached data on failure
//! - Replace-on-refresh: cache tables are swapped wholesale inside a
//!   transaction, never partially updated
//! - Pure views: matching and filtering never touch I/O

mod error;

pub mod db;
pub mod filter;
pub mod matcher;
pub mod remote;
pub mod repository;
pub mod types;

pub use error::{Error, Result};
pub use filter::{FilterCriteria, SortMode, apply_filter, meals_in_category};
pub use matcher::{MatchResult, PartialMatch, match_recipes};
pub use remote::{ApiClient, DEFAULT_API_URL};
pub use repository::{Catalog, EntityStatus, SyncReport, fetch_with_fallback};
pub use types::{Category, Ingredient, IngredientLine, Recipe};
