//! Per-shopper session state.
//!
//! Each session owns its own [`Cart`] and current [`QuerySpec`]. The catalog
//! is passed in on every call, so many sessions can read one catalog while
//! never sharing a cart.

use crate::cart::{Cart, CartSummary, Quantity};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::{ProductId, SessionId};
use crate::search::{QuerySpec, SearchResults};

/// One shopper's view of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    /// Current filter and sort selection.
    pub spec: QuerySpec,
    cart: Cart,
}

impl Session {
    /// Start a session with a generated id and an empty cart.
    pub fn new() -> Self {
        Self::with_id(SessionId::generate())
    }

    /// Start a session with a known id.
    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            spec: QuerySpec::default(),
            cart: Cart::new(),
        }
    }

    /// The session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Products for the current selection.
    pub fn listing<'a>(&self, catalog: &'a Catalog) -> SearchResults<'a> {
        catalog.query(&self.spec)
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Ids the catalog does not know are refused here, so the cart only
    /// ever holds ids that resolved at the time they were added.
    pub fn add_to_cart(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
    ) -> Result<Quantity, CommerceError> {
        if !catalog.contains(product_id) {
            return Err(CommerceError::ProductNotFound(product_id.get()));
        }
        Ok(self.cart.add(product_id))
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Cart snapshot for display.
    pub fn summary<'a>(&'a self, catalog: &'a Catalog) -> CartSummary<'a> {
        CartSummary::build(&self.cart, catalog)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortKey;

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn test_sessions_do_not_share_carts() {
        let catalog = Catalog::demo();
        let mut alice = Session::with_id(SessionId::new("alice"));
        let bob = Session::with_id(SessionId::new("bob"));

        alice.add_to_cart(&catalog, id(1)).unwrap();
        assert_eq!(alice.cart().quantity(id(1)), 1);
        assert!(bob.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = Catalog::demo();
        let mut session = Session::new();
        assert_eq!(
            session.add_to_cart(&catalog, id(99)),
            Err(CommerceError::ProductNotFound(99))
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_listing_follows_spec() {
        let catalog = Catalog::demo();
        let mut session = Session::new();
        session.spec = QuerySpec::new()
            .with_category("Home & Kitchen")
            .with_sort(SortKey::PriceAsc);
        assert_eq!(session.listing(&catalog).ids(), vec![5, 3]);
    }

    #[test]
    fn test_summary_and_clear() {
        let catalog = Catalog::demo();
        let mut session = Session::new();
        session.add_to_cart(&catalog, id(3)).unwrap();
        session.add_to_cart(&catalog, id(3)).unwrap();
        session.add_to_cart(&catalog, id(5)).unwrap();

        assert_eq!(session.summary(&catalog).total.amount, 797);

        session.clear_cart();
        assert!(session.summary(&catalog).is_empty());
    }
}
