//! Search module.
//!
//! The query pipeline: category filter, then text search, then a stable sort.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{QuerySpec, SortKey};
pub use results::{query, SearchResults};
