//! Commerce error types.

use thiserror::Error;

/// Errors raised while building or parsing storefront data.
///
/// Query and cart operations never fail; these only surface at
/// construction boundaries (catalog loading, id and sort key parsing).
#[derive(Error, Debug, PartialEq)]
pub enum CommerceError {
    /// Product ids must be positive.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Two catalog entries share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(u64),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// Rating outside of [0.0, 5.0].
    #[error("Invalid rating {rating} for product {product_id}")]
    InvalidRating { product_id: u64, rating: f64 },

    /// A required text field is blank.
    #[error("Product {product_id} has an empty {field}")]
    EmptyField {
        product_id: u64,
        field: &'static str,
    },

    /// Unrecognized sort key.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Unrecognized currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
