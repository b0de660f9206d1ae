// src/cli.rs
//! CLI definitions for larder
//!
//! This module contains all command-line interface definitions using
//! clap. The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use larder::DEFAULT_API_URL;

#[derive(Parser)]
#[command(name = "larder")]
#[command(author = "Larder Project")]
#[command(version)]
#[command(about = "Offline-first meal catalog with ingredient matching", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the cache database
    Init {
        /// Cache database path (default: platform data directory)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Refresh all cached collections from the remote API
    Sync {
        /// Cache database path (default: platform data directory)
        #[arg(short, long)]
        db_path: Option<String>,

        /// API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },

    /// Search and filter meals
    Search {
        /// Free-text query over name, category, and area
        query: Option<String>,

        /// Restrict to these categories (exact match, repeatable)
        #[arg(short, long)]
        category: Vec<String>,

        /// Restrict to these areas (exact match, repeatable)
        #[arg(short, long)]
        area: Vec<String>,

        /// Sort order: name, name-desc, category, or area
        #[arg(short, long, default_value = "name")]
        sort: String,

        /// Cache database path (default: platform data directory)
        #[arg(short, long)]
        db_path: Option<String>,

        /// API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },

    /// Match meals against a basket of ingredients
    Match {
        /// Ingredient names to match against
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Cache database path (default: platform data directory)
        #[arg(short, long)]
        db_path: Option<String>,

        /// API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },

    /// List meals in one category (exact name, case-insensitive)
    Category {
        /// Category name
        name: String,

        /// Cache database path (default: platform data directory)
        #[arg(short, long)]
        db_path: Option<String>,

        /// API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },

    /// List all meal categories
    Categories {
        /// Cache database path (default: platform data directory)
        #[arg(short, long)]
        db_path: Option<String>,

        /// API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },

    /// List the ingredient catalog
    Ingredients {
        /// Cache database path (default: platform data directory)
        #[arg(short, long)]
        db_path: Option<String>,

        /// API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },

    /// Show cache row counts and last-sync times
    Status {
        /// Cache database path (default: platform data directory)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}
