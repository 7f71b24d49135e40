//! Catalog, query pipeline and cart logic for the mini storefront.
//!
//! This crate is the pure core behind the storefront's presentation layer:
//!
//! - **Catalog**: immutable, ordered product list (built-in demo or loaded)
//! - **Search**: category filter, text search and stable sort over a catalog
//! - **Cart**: per-session product id to quantity store, totals, line items
//! - **Session**: one shopper's current selection and cart
//!
//! Everything is synchronous and allocation-light; no operation outlives a
//! single call.
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let spec = QuerySpec::new()
//!     .with_category("Home & Kitchen")
//!     .with_sort(SortKey::PriceAsc);
//! assert_eq!(catalog.query(&spec).ids(), vec![5, 3]);
//!
//! let mut cart = Cart::new();
//! let bottle = ProductId::new(3).unwrap();
//! cart.add(bottle);
//! cart.add(bottle);
//! cart.add(ProductId::new(5).unwrap());
//! assert_eq!(total(&cart, &catalog), 797);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::{ProductId, SessionId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, SessionId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogData, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{line_items, total, Cart, CartSummary, LineItem, Quantity};

    // Search
    pub use crate::search::{query, Filter, QuerySpec, SearchResults, SortKey};

    // Session
    pub use crate::session::Session;
}
