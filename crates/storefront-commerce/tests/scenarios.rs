//! End-to-end scenarios over the demo catalog.

use storefront_commerce::prelude::*;

fn id(raw: u64) -> ProductId {
    ProductId::new(raw).unwrap()
}

#[test]
fn home_and_kitchen_then_cart_total() {
    let catalog = Catalog::demo();

    let spec = QuerySpec::new().with_category("Home & Kitchen");
    let mut ids = catalog.query(&spec).ids();
    ids.sort_unstable();
    assert_eq!(ids, vec![3, 5]);

    let mut cart = Cart::new();
    cart.add(id(3));
    cart.add(id(3));
    cart.add(id(5));

    let held: Vec<(u64, u64)> = cart.iter().map(|(p, q)| (p.get(), q.get())).collect();
    assert_eq!(held, vec![(3, 2), (5, 1)]);
    assert_eq!(total(&cart, &catalog), 299 * 2 + 199);
    assert_eq!(total(&cart, &catalog), 797);
}

#[test]
fn search_is_case_insensitive() {
    let catalog = Catalog::demo();
    for text in ["mouse", "MOUSE", "Mouse", "mOuSe"] {
        let results = query(&catalog, &QuerySpec::new().with_search(text));
        assert_eq!(results.ids(), vec![1], "search text {:?}", text);
    }
}

#[test]
fn rating_desc_over_full_catalog() {
    let catalog = Catalog::demo();
    let results = query(&catalog, &QuerySpec::new().with_sort(SortKey::RatingDesc));
    assert_eq!(results.ids(), vec![2, 4, 1, 3, 5]);

    let ratings: Vec<f64> = results.iter().map(|p| p.rating).collect();
    assert_eq!(ratings, vec![4.7, 4.5, 4.3, 4.1, 4.0]);
}

#[test]
fn all_stages_compose() {
    let catalog = Catalog::demo();
    let spec = QuerySpec::new()
        .with_category("Electronics")
        .with_search("for")
        .with_sort(SortKey::PriceDesc);
    // Substring match: "Comfortable" hits as well as "for gaming".
    assert_eq!(catalog.query(&spec).ids(), vec![2, 1]);
}

#[test]
fn query_leaves_catalog_untouched() {
    let catalog = Catalog::demo();
    let before = catalog.clone();
    for sort in SortKey::ALL {
        let _ = catalog.query(&QuerySpec::new().with_sort(sort));
    }
    assert_eq!(catalog, before);
}

#[test]
fn clear_after_adds() {
    let catalog = Catalog::demo();
    let mut cart = Cart::new();
    for raw in [1, 2, 2, 4] {
        cart.add(id(raw));
    }
    assert_eq!(total(&cart, &catalog), 599 + 2499 * 2 + 1999);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(total(&cart, &catalog), 0);
}

#[test]
fn summary_serializes_for_json_output() {
    let catalog = Catalog::demo();
    let mut session = Session::new();
    session.add_to_cart(&catalog, id(1)).unwrap();

    let json = serde_json::to_value(session.summary(&catalog)).unwrap();
    assert_eq!(json["total"]["amount"], 599);
    assert_eq!(json["lines"][0]["product"]["name"], "Wireless Mouse");
    assert_eq!(json["lines"][0]["quantity"], 1);
}
