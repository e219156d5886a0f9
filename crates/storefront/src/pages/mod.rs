//! Text page rendering.
//!
//! Each page is an askama template over plain view structs. The view
//! structs hold display-ready strings computed from the store and config,
//! so templates never do arithmetic or formatting of their own.
//!
//! # Pages
//!
//! - [`listing`] - searchable, filterable, sorted product grid
//! - [`product`] - product detail with related products
//! - [`cart`] - cart page and the navbar dropdown preview

pub mod cart;
pub mod listing;
pub mod product;

pub use cart::{render_cart, render_cart_preview};
pub use listing::{ListingQuery, render_listing};
pub use product::render_product;

use askama::Template;

use crate::config::StorefrontConfig;
use crate::models::Product;
use crate::store::Store;
use crate::views::cart_totals;

/// Application name shown in the navbar.
pub const BRAND: &str = "ProductHub";

/// Navigation bar display data, shared by every page.
#[derive(Debug, Clone)]
pub struct NavbarView {
    pub brand: &'static str,
    pub cart_count: u64,
    pub signed_in: bool,
    pub user_name: String,
}

impl NavbarView {
    /// Navbar state for the current session.
    #[must_use]
    pub fn new(store: &Store) -> Self {
        Self {
            brand: BRAND,
            cart_count: cart_totals(store.cart()).total_items,
            signed_in: store.user().is_some(),
            user_name: store.user().map(|u| u.name.clone()).unwrap_or_default(),
        }
    }
}

/// Product card display data for listing grids.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub rating: String,
    pub stars: String,
    pub stock_label: String,
    pub in_stock: bool,
}

impl ProductCard {
    /// Card for one product.
    #[must_use]
    pub fn new(product: &Product, config: &StorefrontConfig) -> Self {
        let stock = product.stock_status(config.low_stock_threshold);
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.display(config.currency),
            rating: product.rating.to_string(),
            stars: product.rating.stars(),
            stock_label: stock.label(),
            in_stock: stock.is_available(),
        }
    }
}

/// Render a page, trimming the trailing blank lines left by block tags.
fn render(template: &impl Template) -> askama::Result<String> {
    let rendered = template.render()?;
    let mut out = rendered.trim_end().to_string();
    out.push('\n');
    Ok(out)
}
