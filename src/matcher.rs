// src/matcher.rs

//! Ingredient-basket matching
//!
//! Partitions a candidate recipe set against a basket of selected
//! ingredient names into exact matches (every selected ingredient found)
//! and partial matches (some but not all), with partial matches ordered by
//! descending match count.
//!
//! Matching is a deliberately loose bidirectional substring test, not set
//! intersection: selecting "onion" matches a recipe ingredient
//! "red onion", and selecting "red onion" matches an ingredient "onion".

use crate::types::Recipe;

/// A recipe that satisfied some but not all of the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialMatch {
    pub recipe: Recipe,
    /// Number of selected ingredients this recipe satisfied
    pub matched: usize,
}

/// Output partition of [`match_recipes`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Recipes containing every selected ingredient, in input order
    pub exact: Vec<Recipe>,
    /// Recipes containing some selected ingredients, descending by count
    pub partial: Vec<PartialMatch>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty()
    }
}

/// Normalize a selection: trim, lowercase, drop blanks, de-duplicate
/// preserving first-seen order.
fn normalize_selection(selected: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for raw in selected {
        let name = raw.trim().to_lowercase();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// True if either string contains the other
fn fuzzy_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Count how many selected names this recipe satisfies.
///
/// Each selected name counts at most once, no matter how many of the
/// recipe's ingredient lines it matches.
fn match_count(recipe: &Recipe, selection: &[String]) -> usize {
    let ingredients: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|line| line.name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    selection
        .iter()
        .filter(|name| ingredients.iter().any(|ing| fuzzy_contains(ing, name)))
        .count()
}

/// Partition `recipes` by how well they cover the selected ingredients.
///
/// An empty selection (after trimming and blank-filtering) or an empty
/// recipe list yields an empty result; recipes matching none of the
/// selection appear in neither list. Pure and deterministic.
pub fn match_recipes(recipes: &[Recipe], selected: &[String]) -> MatchResult {
    let selection = normalize_selection(selected);
    if selection.is_empty() || recipes.is_empty() {
        return MatchResult::default();
    }

    let mut result = MatchResult::default();
    for recipe in recipes {
        let count = match_count(recipe, &selection);
        if count == selection.len() {
            result.exact.push(recipe.clone());
        } else if count > 0 {
            result.partial.push(PartialMatch {
                recipe: recipe.clone(),
                matched: count,
            });
        }
    }

    // Stable sort keeps input order for equal counts
    result.partial.sort_by(|a, b| b.matched.cmp(&a.matched));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IngredientLine;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            name: Some(name.to_string()),
            ingredients: ingredients
                .iter()
                .map(|ing| IngredientLine {
                    name: ing.to_string(),
                    measure: None,
                })
                .collect(),
            ..Recipe::default()
        }
    }

    fn selection(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        let recipes = vec![recipe("Stew", &["beef", "onion"])];
        let result = match_recipes(&recipes, &[]);
        assert!(result.is_empty());

        // Blanks alone count as an empty selection
        let result = match_recipes(&recipes, &selection(&["", "   "]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_recipes_match_nothing() {
        let result = match_recipes(&[], &selection(&["onion"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_full_coverage_is_exact() {
        let recipes = vec![recipe("Stew", &["beef", "onion", "carrot"])];
        let result = match_recipes(&recipes, &selection(&["onion", "carrot"]));
        assert_eq!(result.exact.len(), 1);
        assert_eq!(result.exact[0].display_name(), "Stew");
        assert!(result.partial.is_empty());
    }

    #[test]
    fn test_partial_coverage_reports_count() {
        let recipes = vec![recipe("Stew", &["beef", "onion", "carrot"])];
        let result = match_recipes(&recipes, &selection(&["onion", "carrot", "salt"]));
        assert!(result.exact.is_empty());
        assert_eq!(result.partial.len(), 1);
        assert_eq!(result.partial[0].matched, 2);
    }

    #[test]
    fn test_no_overlap_is_excluded() {
        let recipes = vec![recipe("Toast", &["bread", "butter"])];
        let result = match_recipes(&recipes, &selection(&["onion"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_substring_matches_both_directions() {
        let recipes = vec![recipe("Soup", &["red onion"])];
        let result = match_recipes(&recipes, &selection(&["onion"]));
        assert_eq!(result.exact.len(), 1);

        let recipes = vec![recipe("Soup", &["onion"])];
        let result = match_recipes(&recipes, &selection(&["red onion"]));
        assert_eq!(result.exact.len(), 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let recipes = vec![recipe("Curry", &["Chicken Breast"])];
        let result = match_recipes(&recipes, &selection(&["  CHICKEN  "]));
        assert_eq!(result.exact.len(), 1);
    }

    #[test]
    fn test_duplicate_selection_collapses() {
        let recipes = vec![recipe("Stew", &["beef", "onion"])];
        let result = match_recipes(&recipes, &selection(&["onion", "Onion", " onion "]));
        // One distinct name selected, fully covered
        assert_eq!(result.exact.len(), 1);
    }

    #[test]
    fn test_selected_name_counted_once_per_recipe() {
        // "onion" matches two ingredient lines but counts once, so the
        // recipe cannot reach count 2 out of a 2-name selection.
        let recipes = vec![recipe("Pickle", &["red onion", "spring onion"])];
        let result = match_recipes(&recipes, &selection(&["onion", "vinegar"]));
        assert!(result.exact.is_empty());
        assert_eq!(result.partial.len(), 1);
        assert_eq!(result.partial[0].matched, 1);
    }

    #[test]
    fn test_partials_sorted_by_descending_count() {
        let recipes = vec![
            recipe("One", &["salt"]),
            recipe("Two", &["salt", "pepper"]),
            recipe("AlsoOne", &["pepper"]),
        ];
        let result = match_recipes(&recipes, &selection(&["salt", "pepper", "saffron"]));
        let counts: Vec<usize> = result.partial.iter().map(|p| p.matched).collect();
        assert_eq!(counts, vec![2, 1, 1]);
        // Stable: equal counts keep input order
        assert_eq!(result.partial[1].recipe.display_name(), "One");
        assert_eq!(result.partial[2].recipe.display_name(), "AlsoOne");
    }

    #[test]
    fn test_recipe_without_ingredients_never_matches() {
        let recipes = vec![recipe("Mystery", &[])];
        let result = match_recipes(&recipes, &selection(&["onion"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_exact_matches_preserve_input_order() {
        let recipes = vec![
            recipe("Zebra Cake", &["flour", "cocoa"]),
            recipe("Apple Pie", &["flour", "apple", "cocoa"]),
        ];
        let result = match_recipes(&recipes, &selection(&["flour", "cocoa"]));
        assert_eq!(result.exact[0].display_name(), "Zebra Cake");
        assert_eq!(result.exact[1].display_name(), "Apple Pie");
    }
}
