// src/commands.rs
//! Command handlers for the larder CLI

use std::collections::HashSet;
use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use tracing::info;

use larder::filter::{FilterCriteria, SortMode, apply_filter, meals_in_category};
use larder::matcher::match_recipes;
use larder::repository::{Catalog, EntityStatus, parse_timestamp};
use larder::types::Recipe;

use crate::cli::Cli;

/// Resolve the database path, defaulting to the platform data directory
fn resolve_db_path(db_path: Option<String>) -> Result<String> {
    match db_path {
        Some(path) => Ok(path),
        None => {
            let path = larder::db::default_db_path();
            path.to_str()
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("Default database path is not valid UTF-8"))
        }
    }
}

fn open_catalog(db_path: Option<String>, api_url: &str) -> Result<Catalog> {
    let db_path = resolve_db_path(db_path)?;
    Ok(Catalog::open(&db_path, api_url)?)
}

fn print_recipe_line(recipe: &Recipe) {
    let category = recipe.category.as_deref().unwrap_or("-");
    let area = recipe.area.as_deref().unwrap_or("-");
    println!("  {:<40} {:<15} {}", recipe.display_name(), category, area);
}

/// `larder init`
pub fn init(db_path: Option<String>) -> Result<()> {
    let db_path = resolve_db_path(db_path)?;
    info!("Initializing larder database at: {}", db_path);
    larder::db::init(&db_path)?;
    println!("Database initialized at: {db_path}");
    Ok(())
}

/// `larder sync`
pub fn sync(db_path: Option<String>, api_url: &str) -> Result<()> {
    let mut catalog = open_catalog(db_path, api_url)?;
    let report = catalog.refresh_all()?;
    println!(
        "Synced {} meals, {} categories, {} ingredients",
        report.meals, report.categories, report.ingredients
    );
    Ok(())
}

/// `larder search`
pub fn search(
    query: Option<String>,
    categories: Vec<String>,
    areas: Vec<String>,
    sort: &str,
    db_path: Option<String>,
    api_url: &str,
) -> Result<()> {
    let sort: SortMode = sort
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let criteria = FilterCriteria {
        query: query.unwrap_or_default(),
        categories: categories.into_iter().collect::<HashSet<String>>(),
        areas: areas.into_iter().collect::<HashSet<String>>(),
        sort,
    };

    let mut catalog = open_catalog(db_path, api_url)?;
    let meals = catalog.meals()?;
    let results = apply_filter(&meals, &criteria);

    if results.is_empty() {
        if criteria.is_unconstrained() {
            println!("The catalog is empty. Run `larder sync` first.");
        } else {
            println!("No meals match the given criteria.");
        }
        return Ok(());
    }

    println!("{} meal(s):", results.len());
    for recipe in &results {
        print_recipe_line(recipe);
    }
    Ok(())
}

/// `larder match`
pub fn match_ingredients(
    ingredients: Vec<String>,
    db_path: Option<String>,
    api_url: &str,
) -> Result<()> {
    let mut catalog = open_catalog(db_path, api_url)?;
    let meals = catalog.meals()?;
    let result = match_recipes(&meals, &ingredients);

    if result.is_empty() {
        println!("No meals use any of the selected ingredients.");
        return Ok(());
    }

    if !result.exact.is_empty() {
        println!("Exact matches ({}):", result.exact.len());
        for recipe in &result.exact {
            print_recipe_line(recipe);
        }
    }

    if !result.partial.is_empty() {
        println!("Partial matches ({}):", result.partial.len());
        for partial in &result.partial {
            let category = partial.recipe.category.as_deref().unwrap_or("-");
            println!(
                "  {:<40} {:<15} {} ingredient(s) matched",
                partial.recipe.display_name(),
                category,
                partial.matched
            );
        }
    }
    Ok(())
}

/// `larder category`
pub fn category(name: &str, db_path: Option<String>, api_url: &str) -> Result<()> {
    let mut catalog = open_catalog(db_path, api_url)?;
    let meals = catalog.meals()?;
    let results = meals_in_category(&meals, name);

    if results.is_empty() {
        println!("No meals in category '{name}'.");
        return Ok(());
    }

    println!("{} meal(s) in '{}':", results.len(), name);
    for recipe in &results {
        print_recipe_line(recipe);
    }
    Ok(())
}

/// `larder categories`
pub fn categories(db_path: Option<String>, api_url: &str) -> Result<()> {
    let mut catalog = open_catalog(db_path, api_url)?;
    let categories = catalog.categories()?;

    println!("{} categories:", categories.len());
    for category in &categories {
        println!("  {}", category.name);
    }
    Ok(())
}

/// `larder ingredients`
pub fn ingredients(db_path: Option<String>, api_url: &str) -> Result<()> {
    let mut catalog = open_catalog(db_path, api_url)?;
    let ingredients = catalog.ingredients()?;

    println!("{} ingredients:", ingredients.len());
    for ingredient in &ingredients {
        match &ingredient.kind {
            Some(kind) => println!("  {:<30} ({})", ingredient.name, kind),
            None => println!("  {}", ingredient.name),
        }
    }
    Ok(())
}

fn format_age(last_synced_at: &str) -> String {
    let Ok(synced) = parse_timestamp(last_synced_at) else {
        return format!("invalid timestamp: {last_synced_at}");
    };
    let age = chrono::Utc::now().timestamp() - synced;
    match age {
        a if a < 0 => "in the future".to_string(),
        a if a < 60 => format!("{a}s ago"),
        a if a < 3600 => format!("{}m ago", a / 60),
        a if a < 86400 => format!("{}h ago", a / 3600),
        a => format!("{}d ago", a / 86400),
    }
}

/// `larder status`
pub fn status(db_path: Option<String>) -> Result<()> {
    let db_path = resolve_db_path(db_path)?;
    let conn = larder::db::open(&db_path)?;
    let statuses: Vec<EntityStatus> = larder::repository::cache_status(&conn)?;

    println!("Cache: {db_path}");
    for status in &statuses {
        let synced = status
            .last_synced_at
            .as_deref()
            .map(format_age)
            .unwrap_or_else(|| "never synced".to_string());
        println!("  {:<12} {:>5} row(s), {}", status.entity, status.rows, synced);
    }
    Ok(())
}

/// `larder completions`
pub fn completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "larder", &mut io::stdout());
    Ok(())
}
