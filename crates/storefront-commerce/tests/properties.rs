//! Laws of the query pipeline and cart over generated catalogs.

use std::collections::HashSet;

use proptest::prelude::*;
use storefront_commerce::prelude::*;

const CATEGORIES: [&str; 3] = ["Books", "Garden", "Toys"];

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_category() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        prop::sample::select(CATEGORIES.to_vec()).prop_map(CategoryFilter::from),
    ]
}

fn arb_spec() -> impl Strategy<Value = QuerySpec> {
    (arb_category(), "[a-cA-C ]{0,3}", arb_sort()).prop_map(|(category, text, sort)| {
        QuerySpec::new()
            .with_category(category)
            .with_search(text)
            .with_sort(sort)
    })
}

/// Catalogs of up to 12 products with ids 1..=n and coarse prices/ratings,
/// so sort keys collide often.
fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (
            prop::sample::select(CATEGORIES.to_vec()),
            "[a-cA-C]{1,4}",
            "[a-c ]{0,6}",
            0u64..5,
            0u8..=10,
        ),
        0..12,
    )
    .prop_map(|rows| {
        let products = rows
            .into_iter()
            .enumerate()
            .map(|(i, (category, name, description, price, rating))| {
                Product::new(
                    ProductId::new(i as u64 + 1).unwrap(),
                    name,
                    category,
                    price * 100,
                    f64::from(rating) / 2.0,
                    description,
                )
            })
            .collect();
        Catalog::new(products, Currency::INR).unwrap()
    })
}

fn position(catalog: &Catalog, product: &Product) -> usize {
    catalog
        .iter()
        .position(|p| p.id == product.id)
        .unwrap()
}

proptest! {
    /// Every result comes from the catalog and appears once.
    #[test]
    fn prop_results_are_subset(catalog in arb_catalog(), spec in arb_spec()) {
        let results = catalog.query(&spec);
        let mut seen = HashSet::new();
        for product in results.iter() {
            prop_assert!(catalog.get(product.id) == Some(product));
            prop_assert!(seen.insert(product.id));
        }
    }

    /// The default spec returns the catalog unchanged.
    #[test]
    fn prop_identity(catalog in arb_catalog()) {
        let results = catalog.query(&QuerySpec::new());
        let expected: Vec<&Product> = catalog.iter().collect();
        prop_assert_eq!(results.items, expected);
    }

    /// Same inputs, same output.
    #[test]
    fn prop_idempotent(catalog in arb_catalog(), spec in arb_spec()) {
        prop_assert_eq!(catalog.query(&spec), catalog.query(&spec));
    }

    /// Results are exactly the products passing both filters.
    #[test]
    fn prop_filters_exact(catalog in arb_catalog(), spec in arb_spec()) {
        let needle = spec.search_text.to_lowercase();
        let expected: HashSet<ProductId> = catalog
            .iter()
            .filter(|p| spec.category.accepts(&p.category))
            .filter(|p| p.mentions(&needle))
            .map(|p| p.id)
            .collect();
        let got: HashSet<ProductId> = catalog.query(&spec).iter().map(|p| p.id).collect();
        prop_assert_eq!(got, expected);
    }

    /// Adjacent results respect the sort key, and ties keep catalog order.
    #[test]
    fn prop_sorted_and_stable(catalog in arb_catalog(), spec in arb_spec()) {
        let results = catalog.query(&spec);
        for pair in results.items.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let tie = match spec.sort {
                SortKey::Relevance => true,
                SortKey::PriceAsc => {
                    prop_assert!(a.price <= b.price);
                    a.price == b.price
                }
                SortKey::PriceDesc => {
                    prop_assert!(a.price >= b.price);
                    a.price == b.price
                }
                SortKey::RatingDesc => {
                    prop_assert!(a.rating >= b.rating);
                    a.rating == b.rating
                }
            };
            if tie {
                prop_assert!(position(&catalog, a) < position(&catalog, b));
            }
        }
    }

    /// Totals equal the hand-computed sum of price * quantity.
    #[test]
    fn prop_total_matches_quantities(
        catalog in arb_catalog(),
        adds in prop::collection::vec(1u64..15, 0..20),
    ) {
        let mut cart = Cart::new();
        for raw in &adds {
            cart.add(ProductId::new(*raw).unwrap());
        }

        let expected: u64 = adds
            .iter()
            .filter_map(|raw| catalog.get(ProductId::new(*raw).unwrap()))
            .map(|p| p.price)
            .sum();
        prop_assert_eq!(total(&cart, &catalog), expected);

        for (product_id, quantity) in cart.iter() {
            let count = adds.iter().filter(|raw| **raw == product_id.get()).count() as u64;
            prop_assert_eq!(quantity.get(), count);
        }

        cart.clear();
        prop_assert!(cart.is_empty());
        prop_assert_eq!(total(&cart, &catalog), 0);
    }
}
