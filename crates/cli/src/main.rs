//! ChatClothes CLI - Text chat interface and staff tools.
//!
//! # Usage
//!
//! ```bash
//! # Public chat menu (browse, search, exchange policy)
//! cc-cli chat
//!
//! # Logged-in shopping session with recommendations
//! cc-cli shop
//!
//! # Staff: add and list products
//! cc-cli product add --type saia --color rosa --size P --price 49.90 --image URL --stock 3
//! cc-cli product list
//! ```
//!
//! # Commands
//!
//! - `chat` - Public chat menu
//! - `shop` - Phone login, recommendations, cart and purchases
//! - `product` - Catalog administration
//!
//! All commands read and write the CSV tables in `--data-dir`
//! (`CHATCLOTHES_DATA_DIR`, default `data`). Logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chatclothes_core::{NewProduct, Price, Size};
use chatclothes_dashboard::config::{DATA_DIR_VAR, DEFAULT_DATA_DIR};
use chatclothes_dashboard::db::Store;

mod commands;
mod prompt;
mod render;

use commands::CliError;
use prompt::Prompt;

#[derive(Parser)]
#[command(name = "cc-cli")]
#[command(author, version, about = "ChatClothes chat and catalog tools")]
struct Cli {
    /// Directory holding the CSV tables
    #[arg(long, env = DATA_DIR_VAR, default_value = DEFAULT_DATA_DIR, global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and search the catalog
    Chat,
    /// Sign in to get recommendations and record purchases
    Shop,
    /// Manage catalog products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Add a new product
    Add {
        /// Garment type (e.g. vestido, camiseta)
        #[arg(long = "type")]
        garment: String,

        /// Color
        #[arg(long)]
        color: String,

        /// Size (PP, P, M, G, GG, XG)
        #[arg(long)]
        size: Size,

        /// Unit price in reais
        #[arg(long)]
        price: Price,

        /// Image URL
        #[arg(long, default_value = "")]
        image: String,

        /// Units in stock
        #[arg(long)]
        stock: u32,
    },
    /// List every product
    List,
}

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they don't interleave with the conversation
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let store = Store::open(&cli.data_dir)?;
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Chat => commands::chat::run(&store, &mut Prompt::new(stdin, stdout))?,
        Commands::Shop => commands::shop::run(&store, &mut Prompt::new(stdin, stdout))?,
        Commands::Product { action } => match action {
            ProductAction::Add {
                garment,
                color,
                size,
                price,
                image,
                stock,
            } => {
                let new = NewProduct {
                    garment,
                    color,
                    size,
                    price,
                    image,
                    stock,
                };
                commands::product::add(&store, new, &mut stdout)?;
            }
            ProductAction::List => commands::product::list(&store, &mut stdout)?,
        },
    }
    Ok(())
}
