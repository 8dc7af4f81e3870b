//! Toyland CLI - browse the catalog and manage the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List toys, optionally filtered
//! toyland catalog list --category STEM --max-price 50
//!
//! # Show one toy
//! toyland catalog show 2
//!
//! # Manage the cart
//! toyland cart add 2
//! toyland cart set 2 3
//! toyland cart show
//! toyland cart checkout
//! ```
//!
//! The CLI reads the same `TOYLAND_CATALOG` and `TOYLAND_DATA_DIR` settings as
//! the storefront, so both see the same saved cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};
use toyland_core::{FilterParams, ToyId};
use toyland_storefront::config::ShopConfig;

mod commands;

#[derive(Parser)]
#[command(name = "toyland")]
#[command(author, version, about = "Toyland catalog and cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the saved cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List toys matching the given filters
    List(FilterArgs),
    /// Show one toy in detail
    Show {
        /// Toy ID
        id: ToyId,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Part of the toy name (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Age code (`0-2`, `3-5`, `6-8`, `9-12`, `13+`)
    #[arg(long)]
    age: Option<String>,

    /// Interest tag
    #[arg(long)]
    interest: Option<String>,

    /// Category
    #[arg(long)]
    category: Option<String>,

    /// Highest price to include
    #[arg(long)]
    max_price: Option<String>,

    /// Gender
    #[arg(long)]
    gender: Option<String>,
}

impl From<FilterArgs> for FilterParams {
    fn from(args: FilterArgs) -> Self {
        Self {
            name: args.name,
            age: args.age,
            interest: args.interest,
            category: args.category,
            max_price: args.max_price,
            gender: args.gender,
        }
    }
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart and its total
    Show,
    /// Add one of a toy
    Add {
        /// Toy ID
        id: ToyId,
    },
    /// Remove a toy entirely
    Remove {
        /// Toy ID
        id: ToyId,
    },
    /// Set a toy's quantity (below 1 removes it)
    Set {
        /// Toy ID
        id: ToyId,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Print the order confirmation
    Checkout,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<String, Box<dyn std::error::Error>> = run(cli).await;

    match result {
        #[allow(clippy::print_stdout)]
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;
    let mut session = commands::open_session(&config).await?;

    let output = match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List(filters) => commands::catalog::list(&mut session, filters.into()),
            CatalogAction::Show { id } => commands::catalog::show(&session, id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&session),
            CartAction::Add { id } => commands::cart::add(&mut session, id)?,
            CartAction::Remove { id } => commands::cart::remove(&mut session, id)?,
            CartAction::Set { id, quantity } => commands::cart::set(&mut session, id, quantity)?,
            CartAction::Checkout => commands::cart::checkout(&session)?,
        },
    };
    Ok(output)
}
