// tests/fallback.rs

//! Read-through semantics against a real SQLite cache: remote-first,
//! cache on failure, original error when both are empty.

mod common;

use larder::db;
use larder::repository::{CacheStore, MealStore, RemoteSource, fetch_with_fallback};
use larder::types::Recipe;
use larder::{Error, Result};

/// A remote source scripted to succeed or fail
struct ScriptedRemote {
    response: std::result::Result<Vec<Recipe>, String>,
}

impl ScriptedRemote {
    fn ok(recipes: Vec<Recipe>) -> Self {
        Self {
            response: Ok(recipes),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

impl RemoteSource for ScriptedRemote {
    type Item = Recipe;

    fn fetch_all(&self) -> Result<Vec<Recipe>> {
        match &self.response {
            Ok(recipes) => Ok(recipes.clone()),
            Err(message) => Err(Error::DownloadError(message.clone())),
        }
    }
}

#[test]
fn test_successful_fetch_returns_remote_and_refreshes_cache() {
    let (_temp, db_path) = common::setup_test_db();
    let mut conn = db::open(&db_path).unwrap();

    // Seed the cache with stale contents
    MealStore::new(&mut conn)
        .replace_all(&[common::recipe("Stale Soup", "Soup", &["water"])])
        .unwrap();

    let fresh = common::sample_recipes();
    let remote = ScriptedRemote::ok(fresh.clone());

    let result = fetch_with_fallback(&remote, &mut MealStore::new(&mut conn)).unwrap();
    assert_eq!(result, fresh);

    // Cache now holds exactly the fresh data
    let cached = MealStore::new(&mut conn).get_all().unwrap();
    assert_eq!(cached, fresh);
}

#[test]
fn test_failed_fetch_serves_cached_data() {
    let (_temp, db_path) = common::setup_test_db();
    let mut conn = db::open(&db_path).unwrap();

    let recipes = common::sample_recipes();
    MealStore::new(&mut conn).replace_all(&recipes).unwrap();

    let remote = ScriptedRemote::failing("connection refused");
    let result = fetch_with_fallback(&remote, &mut MealStore::new(&mut conn)).unwrap();

    // Cached data round-trips through the row mapping unchanged
    assert_eq!(result, recipes);
}

#[test]
fn test_failed_fetch_with_empty_cache_surfaces_original_error() {
    let (_temp, db_path) = common::setup_test_db();
    let mut conn = db::open(&db_path).unwrap();

    let remote = ScriptedRemote::failing("dns lookup failed");
    let err = fetch_with_fallback(&remote, &mut MealStore::new(&mut conn)).unwrap_err();

    match err {
        Error::DownloadError(message) => assert_eq!(message, "dns lookup failed"),
        other => panic!("expected the original fetch error, got {other:?}"),
    }
}

#[test]
fn test_fallback_then_recovery() {
    let (_temp, db_path) = common::setup_test_db();
    let mut conn = db::open(&db_path).unwrap();

    // First call fails outright: nothing cached yet
    let down = ScriptedRemote::failing("offline");
    assert!(fetch_with_fallback(&down, &mut MealStore::new(&mut conn)).is_err());

    // Remote comes back and populates the cache
    let recipes = common::sample_recipes();
    let up = ScriptedRemote::ok(recipes.clone());
    fetch_with_fallback(&up, &mut MealStore::new(&mut conn)).unwrap();

    // Remote goes down again: cache answers
    let result = fetch_with_fallback(&down, &mut MealStore::new(&mut conn)).unwrap();
    assert_eq!(result, recipes);
}

#[test]
fn test_end_to_end_filter_and_match_over_cached_data() {
    let (_temp, db_path) = common::setup_test_db();
    let mut conn = db::open(&db_path).unwrap();

    MealStore::new(&mut conn)
        .replace_all(&common::sample_recipes())
        .unwrap();

    let down = ScriptedRemote::failing("offline");
    let meals = fetch_with_fallback(&down, &mut MealStore::new(&mut conn)).unwrap();

    // Filter the offline data by category
    let criteria = larder::FilterCriteria {
        categories: std::collections::HashSet::from(["Dessert".to_string()]),
        ..larder::FilterCriteria::default()
    };
    let desserts = larder::apply_filter(&meals, &criteria);
    assert_eq!(desserts.len(), 2);
    assert_eq!(desserts[0].display_name(), "Apple Crumble");

    // Match the offline data against a basket
    let result = larder::match_recipes(&meals, &["onion".to_string(), "carrot".to_string()]);
    assert_eq!(result.exact.len(), 1);
    assert_eq!(result.exact[0].display_name(), "Beef Stew");
    assert!(result.partial.is_empty());
}
