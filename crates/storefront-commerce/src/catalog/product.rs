//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category name, matched exactly by the category filter.
    pub category: String,
    /// Price in the catalog's price unit.
    pub price: u64,
    /// Average rating in [0.0, 5.0].
    pub rating: f64,
    /// Short description shown in listings.
    pub description: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: u64,
        rating: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            rating,
            description: description.into(),
        }
    }

    /// Check the field invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::InvalidRating {
                product_id: self.id.get(),
                rating: self.rating,
            });
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::EmptyField {
                product_id: self.id.get(),
                field: "name",
            });
        }
        if self.category.trim().is_empty() {
            return Err(CommerceError::EmptyField {
                product_id: self.id.get(),
                field: "category",
            });
        }
        Ok(())
    }

    /// Whether the name or description contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
