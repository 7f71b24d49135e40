//! Storefront CLI - browse the demo catalog and fill a cart from the terminal.
//!
//! Commands:
//! - `storefront products` - List products for a category, search and sort
//! - `storefront categories` - List category choices
//! - `storefront cart` - Add products to a cart and show the total
//! - `storefront shop` - Interactive browse and cart session
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CategoriesArgs, ConfigArgs, ProductsArgs, ShopArgs};

/// Storefront CLI - a small Amazon-style product demo
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short = 'C', long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a category, search text and sort order
    Products(ProductsArgs),

    /// List the category choices
    Categories(CategoriesArgs),

    /// Add products to a cart and print the summary
    Cart(CartArgs),

    /// Browse and shop interactively
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Categories(args) => commands::categories::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
