// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use larder::db;
use larder::types::{IngredientLine, Recipe};
use tempfile::TempDir;

/// Create an initialized cache database in a temp directory.
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_test_db() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    (temp_dir, db_path)
}

/// Build a recipe with the given name, category, and ingredient names
pub fn recipe(name: &str, category: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: Some(format!("id-{}", name.to_lowercase().replace(' ', "-"))),
        name: Some(name.to_string()),
        category: Some(category.to_string()),
        area: Some("Unknown".to_string()),
        ingredients: ingredients
            .iter()
            .map(|ing| IngredientLine {
                name: ing.to_string(),
                measure: Some("1 unit".to_string()),
            })
            .collect(),
        ..Recipe::default()
    }
}

/// A small mixed-category recipe set
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        recipe("Beef Stew", "Beef", &["beef", "onion", "carrot"]),
        recipe("Tiramisu", "Dessert", &["mascarpone", "coffee", "ladyfingers"]),
        recipe("Apple Crumble", "Dessert", &["apple", "flour", "butter"]),
        recipe("Pad Thai", "Noodles", &["rice noodles", "peanut", "egg"]),
    ]
}
