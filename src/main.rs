// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { db_path }) => commands::init(db_path),
        Some(Commands::Sync { db_path, api_url }) => commands::sync(db_path, &api_url),
        Some(Commands::Search {
            query,
            category,
            area,
            sort,
            db_path,
            api_url,
        }) => commands::search(query, category, area, &sort, db_path, &api_url),
        Some(Commands::Match {
            ingredients,
            db_path,
            api_url,
        }) => commands::match_ingredients(ingredients, db_path, &api_url),
        Some(Commands::Category {
            name,
            db_path,
            api_url,
        }) => commands::category(&name, db_path, &api_url),
        Some(Commands::Categories { db_path, api_url }) => {
            commands::categories(db_path, &api_url)
        }
        Some(Commands::Ingredients { db_path, api_url }) => {
            commands::ingredients(db_path, &api_url)
        }
        Some(Commands::Status { db_path }) => commands::status(db_path),
        Some(Commands::Completions { shell }) => commands::completions(shell),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
