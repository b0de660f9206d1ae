// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: cache database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .help("Cache database path")
}

/// Common argument: API base URL
fn api_url_arg() -> Arg {
    Arg::new("api_url")
        .long("api-url")
        .value_name("URL")
        .help("API base URL")
}

fn build_cli() -> Command {
    Command::new("larder")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Larder Contributors")
        .about("Offline-first meal catalog with ingredient matching")
        .subcommand_required(false)
        .subcommand(
            Command::new("init")
                .about("Create the cache database")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("sync")
                .about("Refresh all cached collections from the remote API")
                .arg(db_path_arg())
                .arg(api_url_arg()),
        )
        .subcommand(
            Command::new("search")
                .about("Search and filter meals")
                .arg(Arg::new("query").help("Free-text query over name, category, and area"))
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .action(clap::ArgAction::Append)
                        .help("Restrict to these categories (exact match, repeatable)"),
                )
                .arg(
                    Arg::new("area")
                        .short('a')
                        .long("area")
                        .action(clap::ArgAction::Append)
                        .help("Restrict to these areas (exact match, repeatable)"),
                )
                .arg(
                    Arg::new("sort")
                        .short('s')
                        .long("sort")
                        .help("Sort order: name, name-desc, category, or area"),
                )
                .arg(db_path_arg())
                .arg(api_url_arg()),
        )
        .subcommand(
            Command::new("match")
                .about("Match meals against a basket of ingredients")
                .arg(
                    Arg::new("ingredients")
                        .required(true)
                        .num_args(1..)
                        .help("Ingredient names to match against"),
                )
                .arg(db_path_arg())
                .arg(api_url_arg()),
        )
        .subcommand(
            Command::new("category")
                .about("List meals in one category (exact name, case-insensitive)")
                .arg(Arg::new("name").required(true).help("Category name"))
                .arg(db_path_arg())
                .arg(api_url_arg()),
        )
        .subcommand(
            Command::new("categories")
                .about("List all meal categories")
                .arg(db_path_arg())
                .arg(api_url_arg()),
        )
        .subcommand(
            Command::new("ingredients")
                .about("List the ingredient catalog")
                .arg(db_path_arg())
                .arg(api_url_arg()),
        )
        .subcommand(
            Command::new("status")
                .about("Show cache row counts and last-sync times")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("larder.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }
}
