// src/filter.rs

//! Declarative meal filtering
//!
//! Applies a [`FilterCriteria`] value object to a recipe collection:
//! free-text query, category/area set membership, and a final sort. All
//! active predicates are AND-combined; empty criteria pass everything.
//!
//! Note the intentional asymmetry carried over from the original
//! behavior: the free-text query is case-insensitive, while category and
//! area set membership is exact (case-sensitive). The companion
//! [`meals_in_category`] lookup is a separate, simpler rule again:
//! case-insensitive equality on the category alone.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use crate::types::Recipe;

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    NameAscending,
    NameDescending,
    Category,
    Area,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::NameAscending => "name",
            SortMode::NameDescending => "name-desc",
            SortMode::Category => "category",
            SortMode::Area => "area",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortMode::NameAscending),
            "name-desc" => Ok(SortMode::NameDescending),
            "category" => Ok(SortMode::Category),
            "area" => Ok(SortMode::Area),
            _ => Err(format!(
                "Invalid sort mode: {s} (expected name, name-desc, category, or area)"
            )),
        }
    }
}

/// Filter criteria: every field independently optional, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring over name, category, and area
    pub query: String,
    /// Exact category membership; empty = no constraint
    pub categories: HashSet<String>,
    /// Exact area membership; empty = no constraint
    pub areas: HashSet<String>,
    pub sort: SortMode,
}

impl FilterCriteria {
    /// True when no predicate is active (the sort still applies)
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty() && self.areas.is_empty()
    }
}

fn matches_query(recipe: &Recipe, query: &str) -> bool {
    [&recipe.name, &recipe.category, &recipe.area]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(query))
}

fn compare_names(a: &Recipe, b: &Recipe) -> Ordering {
    // Option ordering sorts missing names first
    a.name.cmp(&b.name)
}

/// Filter and sort a recipe collection.
///
/// Never fails: an empty result simply means nothing passed. Idempotent,
/// and with default criteria it returns the whole input sorted by name.
pub fn apply_filter(recipes: &[Recipe], criteria: &FilterCriteria) -> Vec<Recipe> {
    let query = criteria.query.trim().to_lowercase();

    let mut filtered: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| {
            (query.is_empty() || matches_query(recipe, &query))
                && (criteria.categories.is_empty()
                    || recipe
                        .category
                        .as_ref()
                        .is_some_and(|c| criteria.categories.contains(c)))
                && (criteria.areas.is_empty()
                    || recipe
                        .area
                        .as_ref()
                        .is_some_and(|a| criteria.areas.contains(a)))
        })
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::NameAscending => filtered.sort_by(compare_names),
        SortMode::NameDescending => filtered.sort_by(|a, b| compare_names(b, a)),
        SortMode::Category => filtered.sort_by(|a, b| a.category.cmp(&b.category)),
        SortMode::Area => filtered.sort_by(|a, b| a.area.cmp(&b.area)),
    }

    filtered
}

/// Recipes whose category equals `category`, ignoring case.
///
/// This is the exact-match category screen, not the general filter: no
/// substring semantics, no sorting, input order preserved.
pub fn meals_in_category(recipes: &[Recipe], category: &str) -> Vec<Recipe> {
    let target = category.trim().to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            recipe
                .category
                .as_ref()
                .is_some_and(|c| c.to_lowercase() == target)
        })
        .cloned()
        .collect()
}
