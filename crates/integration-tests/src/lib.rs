//! Integration tests for ProductHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p producthub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_properties` - Store mutation laws and cart scenarios
//! - `catalog_views` - Filtering, search, sorting, and pagination
//! - `pages` - Rendered listing, detail, and cart pages
//! - `services` - Simulated sign-in and product submission
//! - `seed_files` - YAML seed catalogs on disk
//!
//! This crate only provides fixtures; the tests live in `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use producthub_core::{Price, ProductId, Rating};
use producthub_storefront::Store;
use producthub_storefront::models::{NewProduct, Product};

/// Build a product with the fields the tests care about.
///
/// # Panics
///
/// Panics if `price` is not a valid non-negative decimal.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(id: &str, name: &str, category: &str, price: &str, quantity: u32) -> Product {
    Product {
        id: ProductId::from(id),
        image: format!("/images/{id}.png"),
        name: name.to_string(),
        category: category.to_string(),
        description: format!("About {name}"),
        specification: "Standard".to_string(),
        rating: Rating::default(),
        price: Price::parse(price).unwrap(),
        quantity,
    }
}

/// A valid add-product candidate.
///
/// # Panics
///
/// Never; the fixed price is valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn new_product(name: &str) -> NewProduct {
    NewProduct {
        image: "/images/new.png".to_string(),
        name: name.to_string(),
        category: "New".to_string(),
        description: format!("About {name}"),
        specification: "Standard".to_string(),
        rating: Rating::default(),
        price: Price::parse("1").unwrap(),
        quantity: 1,
    }
}

/// A catalog of `count` products with ids `"1"..="count"`, alternating
/// between two categories.
#[must_use]
pub fn numbered_catalog(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            let category = if i % 2 == 0 { "Even" } else { "Odd" };
            product(&i.to_string(), &format!("Item {i}"), category, "10", 5)
        })
        .collect()
}

/// A store over `products`.
///
/// # Panics
///
/// Panics if two products share an id.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn store_with(products: Vec<Product>) -> Store {
    Store::with_catalog(products).unwrap()
}
