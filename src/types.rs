// src/types.rs

//! Domain types for the meal catalog
//!
//! These are the compact shapes the matcher and filter operate on, after
//! the wire format's positional ingredient/measure slots have been folded
//! into an ordered list (see `remote::dto`).

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe: name plus optional measure.
///
/// Name and measure come from the same slot position in the wire format,
/// so `measure` describes the quantity of `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub measure: Option<String>,
}

/// A dish record with ingredients and metadata.
///
/// Every field except the ingredient list is optional: the upstream API
/// uses null liberally and recipes are kept usable regardless.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub thumbnail: Option<String>,
    pub instructions: Option<String>,
    pub youtube: Option<String>,
    /// Ordered, blank slots already skipped
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    /// Display name, falling back to the id for nameless records
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("(unnamed)")
    }
}

/// A meal category (e.g. "Dessert", "Seafood")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<String>,
    pub name: String,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

/// A catalog ingredient (the browsable list, not a recipe line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Option<String>,
    pub name: String,
    pub kind: Option<String>,
    pub description: Option<String>,
}
