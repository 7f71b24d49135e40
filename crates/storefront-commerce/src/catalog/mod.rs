//! Product catalog module.
//!
//! A [`Catalog`] is an ordered, immutable list of products fixed at startup.
//! Its order is the canonical "Relevance" order used by the query pipeline.

mod category;
mod demo;
mod product;

pub use category::{CategoryFilter, ALL_CATEGORIES};
pub use product::{Product, MAX_RATING};

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Serialized form of a catalog, as found in a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogData {
    /// Currency all prices are expressed in.
    #[serde(default)]
    pub currency: Currency,
    /// Products in relevance order.
    #[serde(default)]
    pub products: Vec<Product>,
}

/// The fixed, ordered list of purchasable products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog, validating products and id uniqueness.
    pub fn new(products: Vec<Product>, currency: Currency) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id, position).is_some() {
                return Err(CommerceError::DuplicateProductId(product.id.get()));
            }
        }

        Ok(Self {
            products,
            index,
            currency,
        })
    }

    /// The built-in five-product demo catalog, priced in rupees.
    ///
    /// The rows go through the same validation as any loaded catalog. A row
    /// that fails it leaves the demo empty.
    pub fn demo() -> Self {
        demo::demo_products()
            .and_then(|products| Self::new(products, Currency::INR))
            .unwrap_or_else(|_| Self {
                products: Vec::new(),
                index: HashMap::new(),
                currency: Currency::INR,
            })
    }

    /// Build a catalog from its serialized form.
    pub fn from_data(data: CatalogData) -> Result<Self, CommerceError> {
        Self::new(data.products, data.currency)
    }

    /// Parse and validate a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Check whether a product id exists.
    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// All products in relevance order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in relevance order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency all prices are expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Wrap an amount in the catalog currency.
    pub fn money(&self, amount: u64) -> Money {
        Money::new(amount, self.currency)
    }

    /// Distinct category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Choices for a category picker: "All" followed by the sorted categories.
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories().into_iter().map(CategoryFilter::from))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
