// src/remote/client.rs

//! HTTP client for the meal API
//!
//! Thin wrapper around a blocking reqwest client. Each entity type is
//! fetched with a single call returning the full collection; there is no
//! pagination and deliberately no retry at this layer (the read-through
//! repository falls back to the cache instead).

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};
use crate::types::{Category, Ingredient, Recipe};

use super::dto::{CategoriesEnvelope, CategoryDto, IngredientDto, MealDto, MealsEnvelope};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

/// Default timeout for HTTP requests (30 seconds)
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client bound to an API base URL
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        // A trailing slash matters to Url::join: without it the last path
        // segment would be replaced instead of appended.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::ParseError(format!("Invalid API URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::ParseError(format!("Invalid endpoint '{path}': {e}")))
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| Error::DownloadError(format!("Request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .json()
            .map_err(|e| Error::DownloadError(format!("Failed to parse response from {url}: {e}")))
    }

    /// Fetch the full meal collection
    pub fn fetch_meals(&self) -> Result<Vec<Recipe>> {
        let url = self.endpoint("search.php?s=")?;
        let envelope: MealsEnvelope<MealDto> = self.get_json(url)?;
        let meals: Vec<Recipe> = envelope
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(MealDto::into_recipe)
            .collect();
        info!("Fetched {} meals", meals.len());
        Ok(meals)
    }

    /// Fetch the category listing
    pub fn fetch_categories(&self) -> Result<Vec<Category>> {
        let url = self.endpoint("categories.php")?;
        let envelope: CategoriesEnvelope = self.get_json(url)?;
        let categories: Vec<Category> = envelope
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(CategoryDto::into_category)
            .collect();
        info!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    /// Fetch the catalog ingredient listing
    pub fn fetch_ingredients(&self) -> Result<Vec<Ingredient>> {
        let url = self.endpoint("list.php?i=list")?;
        let envelope: MealsEnvelope<IngredientDto> = self.get_json(url)?;
        let ingredients: Vec<Ingredient> = envelope
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(IngredientDto::into_ingredient)
            .collect();
        info!("Fetched {} ingredients", ingredients.len());
        Ok(ingredients)
    }
}
