//! Cart pricing calculations.

use serde::Serialize;

use crate::cart::{Cart, Quantity};
use crate::catalog::{Catalog, Product};
use crate::money::Money;

/// One resolved cart line, ready for rendering.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LineItem<'a> {
    /// The product in the catalog.
    pub product: &'a Product,
    /// How many.
    pub quantity: Quantity,
    /// price * quantity.
    pub line_total: u64,
}

/// Lines of `cart` that resolve against `catalog`, in insertion order.
///
/// Ids with no matching product are skipped. The iterator borrows both
/// inputs and can be rebuilt at any time for a fresh pass.
pub fn line_items<'a>(
    cart: &'a Cart,
    catalog: &'a Catalog,
) -> impl Iterator<Item = LineItem<'a>> + 'a {
    cart.iter().filter_map(move |(product_id, quantity)| {
        let product = catalog.get(product_id)?;
        Some(LineItem {
            product,
            quantity,
            line_total: product.price.saturating_mul(quantity.get()),
        })
    })
}

/// Sum of price * quantity over resolvable lines. Zero for an empty cart.
pub fn total(cart: &Cart, catalog: &Catalog) -> u64 {
    sum_line_totals(line_items(cart, catalog))
}

fn sum_line_totals<'a>(lines: impl IntoIterator<Item = LineItem<'a>>) -> u64 {
    lines
        .into_iter()
        .fold(0u64, |acc, line| acc.saturating_add(line.line_total))
}

/// Snapshot of a cart for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary<'a> {
    /// Resolved lines in insertion order.
    pub lines: Vec<LineItem<'a>>,
    /// Sum of line totals.
    pub total: Money,
    /// Sum of quantities over resolved lines.
    pub item_count: u64,
}

impl<'a> CartSummary<'a> {
    /// Resolve `cart` against `catalog`.
    pub fn build(cart: &'a Cart, catalog: &'a Catalog) -> Self {
        let lines: Vec<LineItem<'a>> = line_items(cart, catalog).collect();
        let amount = sum_line_totals(lines.iter().copied());
        let item_count = lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.quantity.get()));

        Self {
            lines,
            total: catalog.money(amount),
            item_count,
        }
    }

    /// Check if nothing in the cart resolved.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let catalog = Catalog::demo();
        let cart = Cart::new();
        assert_eq!(total(&cart, &catalog), 0);
        assert_eq!(line_items(&cart, &catalog).count(), 0);
        assert!(CartSummary::build(&cart, &catalog).is_empty());
    }

    #[test]
    fn test_single_add_totals_price() {
        let catalog = Catalog::demo();
        for product in catalog.iter() {
            let mut cart = Cart::new();
            cart.add(product.id);
            assert_eq!(total(&cart, &catalog), product.price);
        }
    }

    #[test]
    fn test_line_items() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(id(2));
        cart.add(id(1));
        cart.add(id(2));

        let lines: Vec<(u64, u64, u64)> = line_items(&cart, &catalog)
            .map(|l| (l.product.id.get(), l.quantity.get(), l.line_total))
            .collect();
        assert_eq!(lines, vec![(2, 2, 4998), (1, 1, 599)]);

        // Restartable: a second pass sees the same lines.
        assert_eq!(line_items(&cart, &catalog).count(), 2);
    }

    #[test]
    fn test_summary_total_matches_total() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        for raw in [3, 3, 5, 42, 2] {
            cart.add(id(raw));
        }

        let summary = CartSummary::build(&cart, &catalog);
        assert_eq!(summary.total.amount, total(&cart, &catalog));
        assert_eq!(summary.total.amount, 299 * 2 + 199 + 2499);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(id(42));
        cart.add(id(5));

        assert_eq!(total(&cart, &catalog), 199);
        let summary = CartSummary::build(&cart, &catalog);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.total.display(), "\u{20b9}199");
    }
}
