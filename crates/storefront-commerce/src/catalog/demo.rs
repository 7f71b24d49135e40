//! Built-in demo catalog.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Rows of the demo catalog: (id, name, category, price, rating, description).
const DEMO_PRODUCTS: &[(u64, &str, &str, u64, f64, &str)] = &[
    (
        1,
        "Wireless Mouse",
        "Electronics",
        599,
        4.3,
        "Comfortable wireless mouse with 2.4 GHz connectivity.",
    ),
    (
        2,
        "Mechanical Keyboard",
        "Electronics",
        2499,
        4.7,
        "RGB backlit mechanical keyboard for gaming and typing.",
    ),
    (
        3,
        "Water Bottle 1L",
        "Home & Kitchen",
        299,
        4.1,
        "BPA-free plastic bottle, perfect for daily use.",
    ),
    (
        4,
        "Running Shoes",
        "Fashion",
        1999,
        4.5,
        "Lightweight running shoes with good cushioning.",
    ),
    (
        5,
        "Coffee Mug",
        "Home & Kitchen",
        199,
        4.0,
        "Ceramic mug, microwave and dishwasher safe.",
    ),
];

/// The five demo products in relevance order.
pub(crate) fn demo_products() -> Result<Vec<Product>, CommerceError> {
    DEMO_PRODUCTS
        .iter()
        .map(|&(id, name, category, price, rating, description)| {
            let id = ProductId::new(id)?;
            Ok(Product::new(id, name, category, price, rating, description))
        })
        .collect()
}
