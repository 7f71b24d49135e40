//! Query pipeline and its results.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::{Catalog, Product};
use crate::search::{QuerySpec, SortKey};

/// Products matching a query, in display order.
///
/// Borrows from the catalog; nothing is copied until the caller asks.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResults<'a> {
    /// The matching products.
    pub items: Vec<&'a Product>,
}

impl<'a> SearchResults<'a> {
    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over matches in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    /// Raw ids of the matches, in order.
    pub fn ids(&self) -> Vec<u64> {
        self.items.iter().map(|p| p.id.get()).collect()
    }

    /// Split into grid rows of at most `per_row` products.
    ///
    /// A `per_row` of zero is treated as one.
    pub fn rows(&self, per_row: usize) -> std::slice::Chunks<'_, &'a Product> {
        self.items.chunks(per_row.max(1))
    }
}

/// Run the filter, search and sort stages over `catalog`.
///
/// The catalog is never mutated, and the same inputs always give the same
/// output. Ties under any sort key keep catalog order.
pub fn query<'a>(catalog: &'a Catalog, spec: &QuerySpec) -> SearchResults<'a> {
    let filters = spec.filters();
    let mut items: Vec<&Product> = catalog
        .iter()
        .filter(|product| filters.iter().all(|filter| filter.matches(product)))
        .collect();

    // `sort_by` is stable, which keeps catalog order among equal keys.
    match spec.sort {
        SortKey::Relevance => {}
        SortKey::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
        // NaN never reaches a catalog, so partial_cmp only sees comparable
        // values; it also keeps -0.0 and 0.0 equal.
        SortKey::RatingDesc => items.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
    }

    SearchResults { items }
}

impl Catalog {
    /// Run a query against this catalog. See [`query`].
    pub fn query(&self, spec: &QuerySpec) -> SearchResults<'_> {
        query(self, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn product(id: u64, price: u64, rating: f64) -> Product {
        Product::new(
            ProductId::new(id).unwrap(),
            format!("Item {}", id),
            "Misc",
            price,
            rating,
            "",
        )
    }

    #[test]
    fn test_identity_query() {
        let catalog = Catalog::demo();
        let results = query(&catalog, &QuerySpec::new());
        assert_eq!(results.ids(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_then_sort() {
        let catalog = Catalog::demo();
        let spec = QuerySpec::new()
            .with_category("Electronics")
            .with_sort(SortKey::PriceAsc);
        assert_eq!(catalog.query(&spec).ids(), vec![1, 2]);
    }

    #[test]
    fn test_price_sorts() {
        let catalog = Catalog::demo();
        let asc = query(&catalog, &QuerySpec::new().with_sort(SortKey::PriceAsc));
        assert_eq!(asc.ids(), vec![5, 3, 1, 4, 2]);

        let desc = query(&catalog, &QuerySpec::new().with_sort(SortKey::PriceDesc));
        assert_eq!(desc.ids(), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(
            vec![
                product(7, 100, 4.0),
                product(3, 50, 4.0),
                product(9, 100, 4.5),
                product(1, 50, 4.0),
            ],
            Currency::USD,
        )
        .unwrap();

        let asc = query(&catalog, &QuerySpec::new().with_sort(SortKey::PriceAsc));
        assert_eq!(asc.ids(), vec![3, 1, 7, 9]);

        let desc = query(&catalog, &QuerySpec::new().with_sort(SortKey::PriceDesc));
        assert_eq!(desc.ids(), vec![7, 9, 3, 1]);

        let rating = query(&catalog, &QuerySpec::new().with_sort(SortKey::RatingDesc));
        assert_eq!(rating.ids(), vec![9, 7, 3, 1]);
    }

    #[test]
    fn test_signed_zero_ratings_tie() {
        let catalog = Catalog::from_json(
            r#"{"products": [
                {"id": 1, "name": "Sample A", "category": "Misc", "price": 10, "rating": -0.0, "description": ""},
                {"id": 2, "name": "Sample B", "category": "Misc", "price": 10, "rating": 0.0, "description": ""}
            ]}"#,
        )
        .unwrap();

        let rating = query(&catalog, &QuerySpec::new().with_sort(SortKey::RatingDesc));
        assert_eq!(rating.ids(), vec![1, 2]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let catalog = Catalog::demo();
        let results = query(&catalog, &QuerySpec::new().with_search("telescope"));
        assert!(results.is_empty());
        assert_eq!(results.rows(3).count(), 0);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::demo();
        let results = query(&catalog, &QuerySpec::new().with_category("Toys"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new(), Currency::INR).unwrap();
        let spec = QuerySpec::new().with_search("x").with_sort(SortKey::RatingDesc);
        assert!(query(&catalog, &spec).is_empty());
    }

    #[test]
    fn test_grid_rows() {
        let catalog = Catalog::demo();
        let results = query(&catalog, &QuerySpec::new());
        let sizes: Vec<usize> = results.rows(3).map(|row| row.len()).collect();
        assert_eq!(sizes, vec![3, 2]);
        assert_eq!(results.rows(0).count(), 5);
    }
}
