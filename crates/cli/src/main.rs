//! ProductHub CLI - an interactive terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive session over the starter catalog
//! producthub
//!
//! # Start a session over a YAML catalog
//! producthub --seed catalog.yaml shell
//!
//! # Render one listing page and exit
//! producthub list --category Audio --sort price_asc
//!
//! # Render one product page and exit
//! producthub show 3
//! ```
//!
//! # Commands
//!
//! - `shell` - Interactive session (default)
//! - `list` - Render the product listing
//! - `show` - Render a product detail page
//! - `categories` - List catalog categories
//!
//! Page output goes to stdout; logs go to stderr. Set `RUST_LOG` to change
//! the log level and `PRODUCTHUB_LOG_FORMAT=json` for JSON logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use producthub_storefront::{Store, StorefrontConfig, seed};

mod commands;

use commands::{ListArgs, ShowArgs};

#[derive(Parser)]
#[command(name = "producthub")]
#[command(author, version, about = "ProductHub terminal storefront")]
struct Cli {
    /// YAML catalog to use instead of the starter products
    #[arg(long, global = true, value_name = "FILE")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Shell,
    /// Render the product listing once
    List(ListArgs),
    /// Render a product detail page once
    Show(ShowArgs),
    /// List catalog categories
    Categories,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the stderr subscriber. Defaults to info level for our crates if
/// `RUST_LOG` is not set.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "producthub_storefront=info,producthub_cli=info".into());

    let json = std::env::var("PRODUCTHUB_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    let store = match &cli.seed {
        Some(path) => seed::load_store(path).await?,
        None => Store::new(),
    };
    tracing::info!(products = store.products().len(), "Session store ready");

    let stdout = std::io::stdout();
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::run(store, config).await?,
        Commands::List(args) => commands::query::list(&store, &config, &args, &mut stdout.lock())?,
        Commands::Show(args) => commands::query::show(&store, &config, &args, &mut stdout.lock())?,
        Commands::Categories => commands::query::categories(&store, &mut stdout.lock())?,
    }
    Ok(())
}
