//! # Vitrin Command Line Entry Point
//!
//! Drives a storefront session from the terminal. Every subcommand runs one
//! storefront command and prints its JSON response on stdout; queued
//! notifications go to stderr.
//!
//! ```text
//! vitrin products                     list the catalog
//! vitrin add 3 --color Mavi --qty 2   add to cart
//! vitrin cart                         show cart and totals
//! vitrin favorite 3                   toggle a favorite
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;
use vitrin_core::{CategoryId, ProductId};
use vitrin_storefront::commands::{cart, catalog, config, favorites};
use vitrin_storefront::error::ApiError;
use vitrin_storefront::state::ConfigState;
use vitrin_storefront::Storefront;

/// Vitrin storefront session tool
#[derive(Parser)]
#[command(name = "vitrin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Store namespace (profile) to use
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products, or one category's products
    Products {
        #[arg(long)]
        category: Option<u64>,
    },

    /// Show one product
    Product { id: u64 },

    /// List categories
    Categories,

    /// Show the cart
    Cart,

    /// Add a product to the cart
    Add {
        id: u64,
        #[arg(long)]
        color: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        qty: Option<i64>,
    },

    /// Set the quantity of a cart line (0 removes it)
    Update {
        id: u64,
        /// Negative values reach the command and are rejected there
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        #[arg(long)]
        color: Option<String>,
    },

    /// Remove a cart line
    Remove {
        id: u64,
        #[arg(long)]
        color: Option<String>,
    },

    /// Empty the cart
    Clear,

    /// Toggle a product as favorite
    Favorite { id: u64 },

    /// List favorite products
    Favorites,

    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    vitrin_storefront::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            print_json(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ApiError> {
    let mut config_state = ConfigState::load()?;
    if let Some(namespace) = cli.namespace {
        config_state.namespace = namespace;
    }
    let session = Storefront::bootstrap(config_state)?;
    let shop = &*session.catalog;

    match cli.command {
        Commands::Products { category: None } => {
            print_json(&catalog::list_products(shop, &session.favorites, &session.config))
        }
        Commands::Products {
            category: Some(id),
        } => print_json(&catalog::list_category_products(
            shop,
            &session.favorites,
            &session.config,
            CategoryId(id),
        )?),
        Commands::Product { id } => print_json(&catalog::get_product(
            shop,
            &session.favorites,
            &session.config,
            ProductId(id),
        )?),
        Commands::Categories => print_json(&catalog::list_categories(shop)),
        Commands::Cart => print_json(&cart::get_cart(&session.cart, &session.config)),
        Commands::Add { id, color, qty } => print_json(&cart::add_to_cart(
            shop,
            &session.cart,
            &session.config,
            ProductId(id),
            color,
            qty,
        )?),
        Commands::Update {
            id,
            quantity,
            color,
        } => print_json(&cart::update_cart_item(
            &session.cart,
            &session.config,
            ProductId(id),
            color,
            quantity,
        )?),
        Commands::Remove { id, color } => print_json(&cart::remove_from_cart(
            &session.cart,
            &session.config,
            ProductId(id),
            color,
        )),
        Commands::Clear => print_json(&cart::clear_cart(&session.cart, &session.config)),
        Commands::Favorite { id } => {
            print_json(&favorites::toggle_favorite(&session.favorites, ProductId(id)))
        }
        Commands::Favorites => print_json(&favorites::get_favorites(
            shop,
            &session.favorites,
            &session.config,
        )),
        Commands::Config => print_json(&config::get_config(&session.config)),
    }

    for toast in session.notifications.drain() {
        eprintln!("[{:?}] {}", toast.level, toast.message);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!(error = %e, "Failed to render response"),
    }
}
