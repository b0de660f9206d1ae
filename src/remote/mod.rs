// src/remote/mod.rs

//! Remote meal API: wire DTOs and the blocking HTTP client

mod client;
mod dto;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use dto::{
    CategoriesEnvelope, CategoryDto, IngredientDto, MealDto, MealsEnvelope, INGREDIENT_SLOTS,
};
