//! The catalog/cart store.
//!
//! One [`Store`] holds everything a browsing session knows: the ordered
//! product catalog, the cart, and the optional simulated user. It is built
//! explicitly by the session owner and passed by reference to whatever
//! renders or mutates it; nothing reaches it through global state.
//!
//! Every mutation is total over its input domain. Operations on an unknown
//! product id are no-ops (or report `false`), never errors.

use std::num::NonZeroU32;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use producthub_core::ProductId;

use crate::models::{Cart, CartLine, NewProduct, Product, User};
use crate::seed;

/// Errors building a store from an explicit catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Two catalog entries share an id.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(ProductId),
}

/// In-memory state of one browsing session.
#[derive(Debug, Clone, Serialize)]
pub struct Store {
    products: Vec<Product>,
    cart: Cart,
    user: Option<User>,
    #[serde(skip)]
    last_issued_id: u64,
}

impl Default for Store {
    /// A store seeded with the starter catalog.
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store seeded with the starter catalog, an empty cart, and no user.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: seed::starter_products(),
            cart: Cart::default(),
            user: None,
            last_issued_id: 0,
        }
    }

    /// Create a store over an explicit catalog (seed files, tests).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateProductId`] if two products share an id.
    pub fn with_catalog(products: Vec<Product>) -> Result<Self, StoreError> {
        for (i, product) in products.iter().enumerate() {
            if products.iter().take(i).any(|p| p.id == product.id) {
                return Err(StoreError::DuplicateProductId(product.id.clone()));
            }
        }

        Ok(Self {
            products,
            cart: Cart::default(),
            user: None,
            last_issued_id: 0,
        })
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// The catalog in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product for display. `None` renders as a not-found placeholder.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart line for a product, if present.
    #[must_use]
    pub fn cart_line(&self, id: &ProductId) -> Option<&CartLine> {
        self.cart.get(id)
    }

    /// The signed-in user, or `None` when anonymous.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a product to the end of the catalog under a fresh id.
    ///
    /// The candidate is trusted as-is; validate it with
    /// [`ProductForm`](crate::forms::ProductForm) first.
    pub fn add_product(&mut self, candidate: NewProduct) -> ProductId {
        let id = self.next_product_id();
        info!(product_id = %id, name = %candidate.name, "Product added to catalog");
        self.products.push(candidate.with_id(id.clone()));
        id
    }

    /// Set a product's stock, clamped to a minimum of zero.
    ///
    /// Returns `false` (and changes nothing) if the product does not exist.
    pub fn set_product_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        match self.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.quantity = clamped;
                debug!(product_id = %id, quantity = clamped, "Stock updated");
                true
            }
            None => {
                debug!(product_id = %id, "Stock update for unknown product ignored");
                false
            }
        }
    }

    /// Add units of a product to the cart.
    ///
    /// A repeat add sums quantities. A first add stores a copy of `product`
    /// as it is right now. Stock does not limit the cart.
    pub fn add_to_cart(&mut self, product: &Product, quantity: NonZeroU32) {
        let total = self.cart.add(product, quantity);
        info!(
            product_id = %product.id,
            added = quantity.get(),
            cart_quantity = total.get(),
            "Added to cart"
        );
    }

    /// Remove a product's line from the cart; no-op if absent.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        if self.cart.remove(id) {
            info!(product_id = %id, "Removed from cart");
        }
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    pub fn set_cart_quantity(&mut self, id: &ProductId, quantity: i64) {
        let Some(quantity) = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .or_else(|| (quantity > 0).then_some(NonZeroU32::MAX))
        else {
            self.remove_from_cart(id);
            return;
        };

        if self.cart.set_quantity(id, quantity) {
            debug!(product_id = %id, cart_quantity = quantity.get(), "Cart quantity set");
        }
    }

    /// Replace the session user wholesale (`None` signs out).
    pub fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => info!(user_id = %u.id, email = %u.email, "User signed in"),
            None => info!("User signed out"),
        }
        self.user = user;
    }

    /// Issue an id derived from the current time in milliseconds, bumped past
    /// every numeric id already in the catalog or previously issued.
    fn next_product_id(&mut self) -> ProductId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        let highest_existing = self
            .products
            .iter()
            .filter_map(|p| p.id.as_numeric())
            .max()
            .unwrap_or(0);

        let next = now
            .max(highest_existing.saturating_add(1))
            .max(self.last_issued_id.saturating_add(1));
        self.last_issued_id = next;
        ProductId::from(next)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use producthub_core::{Price, Rating};

    use super::*;

    fn product(id: &str, category: &str, price: &str, quantity: u32) -> Product {
        Product {
            id: ProductId::from(id),
            image: format!("/{id}.png"),
            name: format!("Product {id}"),
            category: category.to_string(),
            description: String::new(),
            specification: String::new(),
            rating: Rating::new(4.0).unwrap(),
            price: Price::parse(price).unwrap(),
            quantity,
        }
    }

    fn candidate(name: &str) -> NewProduct {
        NewProduct {
            image: "/x.png".to_string(),
            name: name.to_string(),
            category: "Other".to_string(),
            description: "d".to_string(),
            specification: "s".to_string(),
            rating: Rating::default(),
            price: Price::parse("1").unwrap(),
            quantity: 1,
        }
    }

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_new_store_has_starter_catalog() {
        let store = Store::new();
        let ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(store.cart().is_empty());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_with_catalog_rejects_duplicates() {
        let result = Store::with_catalog(vec![
            product("1", "A", "1", 1),
            product("1", "B", "2", 2),
        ]);
        assert_eq!(
            result.unwrap_err(),
            StoreError::DuplicateProductId(ProductId::from("1"))
        );
    }

    #[test]
    fn test_add_product_appends_with_unique_ids() {
        let mut store = Store::new();
        let first = store.add_product(candidate("First"));
        let second = store.add_product(candidate("Second"));

        assert_ne!(first, second);
        assert_eq!(store.products().len(), 5);
        assert_eq!(store.products()[3].id, first);
        assert_eq!(store.products()[4].id, second);
        assert!(second.as_numeric().unwrap() > first.as_numeric().unwrap());
    }

    #[test]
    fn test_add_product_skips_past_large_existing_ids() {
        let mut store = Store::with_catalog(vec![product("99999999999999", "A", "1", 1)]).unwrap();
        let id = store.add_product(candidate("New"));
        assert_eq!(id.as_str(), "100000000000000");
    }

    #[test]
    fn test_set_product_quantity_clamps_and_reports_missing() {
        let mut store = Store::new();
        let id = ProductId::from("1");

        assert!(store.set_product_quantity(&id, -4));
        assert_eq!(store.product(&id).unwrap().quantity, 0);

        assert!(store.set_product_quantity(&id, 7));
        assert_eq!(store.product(&id).unwrap().quantity, 7);

        let before = store.products().to_vec();
        assert!(!store.set_product_quantity(&ProductId::from("missing"), 3));
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_add_to_cart_sums_quantities() {
        let mut store = Store::with_catalog(vec![product("1", "A", "10", 5)]).unwrap();
        let p = store.products()[0].clone();

        store.add_to_cart(&p, qty(2));
        store.add_to_cart(&p, qty(3));

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart_line(&p.id).unwrap().cart_quantity(), 5);
    }

    #[test]
    fn test_add_to_cart_ignores_stock() {
        let mut store = Store::with_catalog(vec![product("1", "A", "10", 1)]).unwrap();
        let p = store.products()[0].clone();
        store.add_to_cart(&p, qty(50));
        assert_eq!(store.cart_line(&p.id).unwrap().cart_quantity(), 50);
    }

    #[test]
    fn test_cart_line_is_a_snapshot() {
        let mut store = Store::new();
        let id = ProductId::from("2");
        let p = store.product(&id).unwrap().clone();
        store.add_to_cart(&p, qty(1));

        store.set_product_quantity(&id, 0);

        assert_eq!(store.product(&id).unwrap().quantity, 0);
        assert_eq!(store.cart_line(&id).unwrap().product.quantity, 8);
    }

    #[test]
    fn test_set_cart_quantity_overwrites() {
        let mut store = Store::new();
        let p = store.products()[0].clone();
        store.add_to_cart(&p, qty(2));
        store.set_cart_quantity(&p.id, 9);
        assert_eq!(store.cart_line(&p.id).unwrap().cart_quantity(), 9);
    }

    #[test]
    fn test_set_cart_quantity_non_positive_removes() {
        let mut store = Store::new();
        let p = store.products()[0].clone();

        store.add_to_cart(&p, qty(2));
        store.set_cart_quantity(&p.id, -1);
        assert!(store.cart().is_empty());

        store.add_to_cart(&p, qty(2));
        store.set_cart_quantity(&p.id, 0);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_set_cart_quantity_saturates_large_values() {
        let mut store = Store::new();
        let p = store.products()[0].clone();
        store.add_to_cart(&p, qty(1));
        store.set_cart_quantity(&p.id, i64::MAX);
        let line = store.cart_line(&p.id).unwrap();
        assert_eq!(line.cart_quantity(), u32::MAX);
        assert_eq!(line.line_total().to_string(), "5583414533827.05");
    }

    #[test]
    fn test_missing_cart_lines_are_no_ops() {
        let mut store = Store::new();
        let missing = ProductId::from("nope");
        store.remove_from_cart(&missing);
        store.set_cart_quantity(&missing, 4);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_from_cart() {
        let mut store = Store::new();
        let a = store.products()[0].clone();
        let b = store.products()[1].clone();
        store.add_to_cart(&a, qty(1));
        store.add_to_cart(&b, qty(1));

        store.remove_from_cart(&a.id);

        assert_eq!(store.cart().len(), 1);
        assert!(store.cart_line(&a.id).is_none());
        assert!(store.cart_line(&b.id).is_some());
    }
}
