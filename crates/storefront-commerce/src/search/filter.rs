//! Search filter types.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A predicate over products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Exact, case-sensitive category match.
    Category(String),
    /// Case-insensitive substring of name or description.
    /// Holds the lower-cased needle.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(name: impl Into<String>) -> Self {
        Filter::Category(name.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl AsRef<str>) -> Self {
        Filter::Text(query.as_ref().to_lowercase())
    }

    /// Check a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(name) => product.category == *name,
            Filter::Text(needle) => product.mentions(needle),
        }
    }
}
