//! Text rendering of listings and cart summaries.
//!
//! Functions here return lines instead of printing so the commands decide
//! where they go.

use console::{pad_str, style, Alignment};
use storefront_commerce::cart::CartSummary;
use storefront_commerce::catalog::{Catalog, CategoryFilter, Product};
use storefront_commerce::search::SearchResults;

/// Shown when a query matches nothing.
pub const NO_PRODUCTS: &str = "No products found. Try changing filters or search query.";

/// Shown for a cart with no resolvable lines.
pub const EMPTY_CART: &str = "Cart is empty.";

const GAP: &str = "   ";
const MIN_CARD_WIDTH: usize = 16;
const MAX_CARD_WIDTH: usize = 40;

/// Shape of the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Cards per row.
    pub per_row: usize,
    /// Width of each card in columns.
    pub card_width: usize,
    /// Whether cards include the description.
    pub show_descriptions: bool,
}

impl GridLayout {
    /// Fit `per_row` cards into a terminal `term_width` columns wide.
    pub fn fit(per_row: usize, term_width: usize, show_descriptions: bool) -> Self {
        let per_row = per_row.max(1);
        let gaps = GAP.len() * (per_row - 1);
        let card_width =
            (term_width.saturating_sub(gaps) / per_row).clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);
        Self {
            per_row,
            card_width,
            show_descriptions,
        }
    }
}

/// Render the product grid, or the "no products" line.
pub fn product_grid(results: &SearchResults<'_>, catalog: &Catalog, layout: GridLayout) -> Vec<String> {
    if results.is_empty() {
        return vec![NO_PRODUCTS.to_string()];
    }

    let mut lines = Vec::new();
    for (i, row) in results.rows(layout.per_row).enumerate() {
        if i > 0 {
            lines.push(String::new());
        }

        let cards: Vec<Vec<String>> = row
            .iter()
            .map(|product| product_card(product, catalog, layout))
            .collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        for line_no in 0..height {
            let cells: Vec<String> = cards
                .iter()
                .map(|card| {
                    let text = card.get(line_no).map(String::as_str).unwrap_or("");
                    pad_str(text, layout.card_width, Alignment::Left, Some("…")).into_owned()
                })
                .collect();
            lines.push(cells.join(GAP).trim_end().to_string());
        }
    }
    lines
}

/// Lines of one product card.
pub fn product_card(product: &Product, catalog: &Catalog, layout: GridLayout) -> Vec<String> {
    let mut card = vec![
        style(&product.name).bold().to_string(),
        style(catalog.money(product.price)).green().bold().to_string(),
        rating_label(product.rating),
        style(&product.category).dim().to_string(),
    ];
    if layout.show_descriptions {
        card.extend(wrap(&product.description, layout.card_width));
    }
    card.push(style(format!("#{}", product.id)).dim().to_string());
    card
}

/// Star line for a rating, printed in full (`4.25` stays `4.25`, `4` shows as `4.0`).
pub fn rating_label(rating: f64) -> String {
    format!("⭐ {:?}", rating)
}

/// Render the category picker choices, one per line.
pub fn category_list(options: &[CategoryFilter]) -> Vec<String> {
    options.iter().map(|option| option.label().to_string()).collect()
}

/// Render a cart summary: one line per product, then the total.
pub fn cart_summary(summary: &CartSummary<'_>, catalog: &Catalog) -> Vec<String> {
    if summary.is_empty() {
        return vec![EMPTY_CART.to_string()];
    }

    let mut lines: Vec<String> = summary
        .lines
        .iter()
        .map(|line| {
            format!(
                "{} x {}  — {}",
                line.product.name,
                line.quantity,
                catalog.money(line.line_total)
            )
        })
        .collect();
    lines.push(style(format!("Total: {}", summary.total)).bold().to_string());
    lines
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
