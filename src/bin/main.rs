use std::path::PathBuf;

use camel_uri_ls::catalog::CatalogHandle;
use camel_uri_ls::config::{CompletionSettings, load_settings};
use camel_uri_ls::{UriRoot, complete_at};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Inspect Camel endpoint URIs and complete their schemes from a component catalog
#[derive(Parser)]
#[command(name = "camel-uri-ls")]
#[command(version)]
#[command(about = "Inspect Camel endpoint URIs and complete their schemes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parsed structure of an endpoint URI as JSON
    Parse {
        /// The URI, e.g. "timer:tick?period=1000"
        uri: String,
    },
    /// Print scheme completions for a cursor inside an endpoint URI as JSON
    Complete {
        /// The URI, e.g. "tim:foo"
        uri: String,

        /// Cursor byte offset within the URI
        #[arg(long)]
        offset: usize,

        /// Component catalog directory or JSON file (overrides catalogPath)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn init_logging(settings: &CompletionSettings) {
    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .init();
}

fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().ok();
    let outcome = load_settings(cwd.as_deref(), None);
    init_logging(&outcome.settings);
    for event in &outcome.events {
        event.log();
    }
    let settings = outcome.settings;

    match cli.command {
        Commands::Parse { uri } => {
            print_json(&UriRoot::parse(&uri));
        }
        Commands::Complete {
            uri,
            offset,
            catalog,
        } => {
            let Some(catalog_path) = catalog.or(settings.catalog_path) else {
                eprintln!(
                    "Error: no component catalog. Pass --catalog or set catalogPath in camel-uri-ls.toml."
                );
                std::process::exit(1);
            };

            let handle = CatalogHandle::from_path(catalog_path);
            let root = UriRoot::parse(&uri);
            match complete_at(&root, &handle, offset).await {
                Ok(candidates) => {
                    let candidates: Vec<_> = candidates
                        .into_iter()
                        .filter(|candidate| settings.include_deprecated || !candidate.deprecated)
                        .collect();
                    print_json(&candidates);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
