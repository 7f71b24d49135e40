//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod config;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};
use storefront_commerce::search::{QuerySpec, SortKey};
use storefront_commerce::ProductId;

/// Filter and sort flags shared by listing commands.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Category to show ("All" for every category).
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// Case-insensitive text to look for in names and descriptions.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order: relevance, price-asc, price-desc, rating-desc.
    #[arg(long, default_value = "relevance")]
    pub sort: SortKey,
}

impl QueryArgs {
    /// Build the query spec these flags describe.
    pub fn to_spec(&self) -> QuerySpec {
        QuerySpec::new()
            .with_category(self.category.as_str())
            .with_search(self.search.as_str())
            .with_sort(self.sort)
    }
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Product id to add; repeat to add more units or products.
    #[arg(short, long = "add", value_name = "ID")]
    pub add: Vec<ProductId>,

    /// Empty the cart after adding.
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Initial filter and sort selection.
    #[command(flatten)]
    pub query: QueryArgs,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points at.
    Validate,
}
