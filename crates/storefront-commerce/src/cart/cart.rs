//! Cart store.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// A positive item count. Absence from the cart means zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU64);

impl Quantity {
    /// A single unit.
    pub const ONE: Quantity = Quantity(NonZeroU64::MIN);

    /// Create a quantity, rejecting zero.
    pub fn new(count: u64) -> Option<Self> {
        NonZeroU64::new(count).map(Self)
    }

    /// Get the count.
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// One more, saturating at `u64::MAX`.
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cart slot: a product id and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product being purchased.
    pub product_id: ProductId,
    /// How many.
    pub quantity: Quantity,
}

/// A shopping cart for one session.
///
/// Entries keep insertion order. Ids are not checked against a catalog here;
/// pricing skips ids the catalog cannot resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments an existing entry or appends a new one with quantity 1.
    /// Returns the new quantity.
    pub fn add(&mut self, product_id: ProductId) -> Quantity {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.product_id == product_id)
        {
            existing.quantity = existing.quantity.incremented();
            return existing.quantity;
        }

        self.entries.push(CartEntry {
            product_id,
            quantity: Quantity::ONE,
        });
        Quantity::ONE
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Quantity held for a product (0 when absent).
    pub fn quantity(&self, product_id: ProductId) -> u64 {
        self.entries
            .iter()
            .find(|e| e.product_id == product_id)
            .map(|e| e.quantity.get())
            .unwrap_or(0)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Iterate over `(product_id, quantity)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, Quantity)> + '_ {
        self.entries.iter().map(|e| (e.product_id, e.quantity))
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.quantity.get()))
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn test_cart_starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.quantity(id(1)), 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(id(3)).get(), 1);
        assert_eq!(cart.add(id(3)).get(), 2);

        assert_eq!(cart.quantity(id(3)), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_insertion_order() {
        let mut cart = Cart::new();
        cart.add(id(5));
        cart.add(id(1));
        cart.add(id(5));

        let order: Vec<(u64, u64)> = cart.iter().map(|(p, q)| (p.get(), q.get())).collect();
        assert_eq!(order, vec![(5, 2), (1, 1)]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(id(1));
        cart.add(id(2));
        cart.clear();
        assert!(cart.is_empty());

        // Clearing an empty cart is fine too.
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_saturates() {
        let max = Quantity::new(u64::MAX).unwrap();
        assert_eq!(max.incremented().get(), u64::MAX);
        assert!(Quantity::new(0).is_none());
    }
}
