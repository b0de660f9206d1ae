// src/remote/dto.rs

//! Wire format for the meal API
//!
//! The API returns meals with 20 positional ingredient/measure slots
//! (`strIngredient1`..`strIngredient20` paired with `strMeasure1`..
//! `strMeasure20`), most of them null or blank. The slots are captured
//! through a flattened map and folded into the compact ordered list the
//! rest of the crate works with; slot *i*'s measure always describes slot
//! *i*'s ingredient.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Category, Ingredient, IngredientLine, Recipe};

/// Number of positional ingredient/measure slots in the wire format
pub const INGREDIENT_SLOTS: usize = 20;

/// A meal record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDto {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Remaining fields, including the ingredient/measure slots
    #[serde(flatten)]
    pub slots: BTreeMap<String, Option<String>>,
}

impl MealDto {
    fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).and_then(|value| value.as_deref())
    }

    /// Fold the positional slots into an ordered list, skipping blank
    /// ingredient slots entirely (a measure without an ingredient is
    /// meaningless and dropped with it).
    pub fn ingredient_lines(&self) -> Vec<IngredientLine> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let name = self.slot(&format!("strIngredient{i}"))?.trim();
                if name.is_empty() {
                    return None;
                }
                let measure = self
                    .slot(&format!("strMeasure{i}"))
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(String::from);
                Some(IngredientLine {
                    name: name.to_string(),
                    measure,
                })
            })
            .collect()
    }

    /// Convert to the compact domain shape
    pub fn into_recipe(self) -> Recipe {
        let ingredients = self.ingredient_lines();
        Recipe {
            id: self.id,
            name: self.name,
            category: self.category,
            area: self.area,
            thumbnail: self.thumbnail,
            instructions: self.instructions,
            youtube: self.youtube,
            ingredients,
        }
    }
}

/// A category record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(rename = "idCategory")]
    pub id: Option<String>,
    #[serde(rename = "strCategory")]
    pub name: Option<String>,
    #[serde(rename = "strCategoryThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription")]
    pub description: Option<String>,
}

impl CategoryDto {
    pub fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: self.name.unwrap_or_default(),
            thumbnail: self.thumbnail,
            description: self.description,
        }
    }
}

/// A catalog ingredient as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDto {
    #[serde(rename = "idIngredient")]
    pub id: Option<String>,
    #[serde(rename = "strIngredient")]
    pub name: Option<String>,
    #[serde(rename = "strType")]
    pub kind: Option<String>,
    #[serde(rename = "strDescription")]
    pub description: Option<String>,
}

impl IngredientDto {
    pub fn into_ingredient(self) -> Ingredient {
        Ingredient {
            id: self.id,
            name: self.name.unwrap_or_default(),
            kind: self.kind,
            description: self.description,
        }
    }
}

/// Envelope for meal and catalog-ingredient responses.
///
/// The API encodes "no results" as `"meals": null` rather than an empty
/// array.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// Envelope for the category listing
#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    pub categories: Option<Vec<CategoryDto>>,
}
