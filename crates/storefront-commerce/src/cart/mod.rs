//! Shopping cart module.
//!
//! A [`Cart`] maps product ids to positive quantities. Pricing resolves it
//! against a [`Catalog`](crate::catalog::Catalog) on every read.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;

pub use cart::{Cart, CartEntry, Quantity};
pub use pricing::{line_items, total, CartSummary, LineItem};
