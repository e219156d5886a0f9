//! Product detail page.

use std::num::NonZeroU32;

use askama::Template;
use tracing::{debug, warn};

use producthub_core::ProductId;

use crate::config::StorefrontConfig;
use crate::filters;
use crate::models::Product;
use crate::store::Store;
use crate::views::{paginate, related_products};

use super::{NavbarView, ProductCard, render};

/// Full product display data.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub specification: String,
    pub price: String,
    pub rating: String,
    pub stars: String,
    pub stock_label: String,
    pub in_stock: bool,
    /// Upper bound of the quantity selector.
    pub max_quantity: u32,
}

impl ProductDetail {
    /// Detail view of one product.
    #[must_use]
    pub fn new(product: &Product, config: &StorefrontConfig) -> Self {
        let stock = product.stock_status(config.low_stock_threshold);
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            specification: product.specification.clone(),
            price: product.price.display(config.currency),
            rating: product.rating.to_string(),
            stars: product.rating.stars(),
            stock_label: stock.label(),
            in_stock: stock.is_available(),
            max_quantity: product.quantity,
        }
    }
}

/// Clamp a quantity selector value to `[1, stock]`.
///
/// Returns `None` when the product is out of stock. This limits what the
/// detail page offers; the store itself accepts any quantity.
#[must_use]
pub fn clamp_selector_quantity(requested: u32, stock: u32) -> Option<NonZeroU32> {
    NonZeroU32::new(requested.clamp(1, stock.max(1)).min(stock))
}

/// Product detail page template.
#[derive(Template)]
#[template(path = "product.txt")]
pub struct ProductTemplate {
    pub navbar: NavbarView,
    pub product: ProductDetail,
    /// Units of this product already in the cart.
    pub in_cart: u32,
    pub related: Vec<ProductCard>,
    pub related_page: usize,
    pub related_total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Placeholder for an unknown product id.
#[derive(Template)]
#[template(path = "product_not_found.txt")]
pub struct ProductNotFoundTemplate {
    pub navbar: NavbarView,
    pub id: String,
}

impl ProductTemplate {
    /// Build the detail page for `product` with one page of related products.
    #[must_use]
    pub fn new(
        store: &Store,
        config: &StorefrontConfig,
        product: &Product,
        related_page: usize,
    ) -> Self {
        let related = related_products(store.products(), &product.id);
        let page = paginate(&related, related_page, config.related_page_size);
        debug!(
            product_id = %product.id,
            related = page.total_items,
            "Product detail computed"
        );

        Self {
            navbar: NavbarView::new(store),
            product: ProductDetail::new(product, config),
            in_cart: store
                .cart_line(&product.id)
                .map_or(0, |line| line.cart_quantity()),
            related: page.items.iter().map(|p| ProductCard::new(p, config)).collect(),
            related_page: page.page_index,
            related_total_pages: page.total_pages,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}

/// Render the detail page for `id`, or a not-found placeholder.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_product(
    store: &Store,
    config: &StorefrontConfig,
    id: &ProductId,
    related_page: usize,
) -> askama::Result<String> {
    match store.product(id) {
        Some(product) => render(&ProductTemplate::new(store, config, product, related_page)),
        None => {
            warn!(product_id = %id, "Product not found");
            render(&ProductNotFoundTemplate {
                navbar: NavbarView::new(store),
                id: id.to_string(),
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use producthub_core::{Price, Rating};

    use super::*;

    fn watch(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::from(id),
            image: format!("/{id}.png"),
            name: name.to_string(),
            category: "Wearables".to_string(),
            description: "Tracks things".to_string(),
            specification: "GPS".to_string(),
            rating: Rating::new(4.0).unwrap(),
            price: Price::parse("99").unwrap(),
            quantity: 3,
        }
    }

    #[test]
    fn test_render_detail() {
        let store = Store::new();
        let page = render_product(&store, &StorefrontConfig::default(), &ProductId::from("2"), 1).unwrap();

        assert!(page.contains("Wireless Headphones Pro"));
        assert!(page.contains("Category: Audio"));
        assert!(page.contains("★★★★⯪ 4.6"));
        assert!(page.contains("₱349.99"));
        assert!(page.contains("8 in stock"));
        assert!(page.contains("40-hour battery, ANC, Bluetooth 5.0"));
        assert!(page.contains("Quantity: 1-8"));
        assert!(!page.contains("Related Products"));
    }

    #[test]
    fn test_render_not_found() {
        let store = Store::new();
        let page = render_product(&store, &StorefrontConfig::default(), &ProductId::from("404"), 1).unwrap();
        assert!(page.contains("Product not found"));
        assert!(page.contains("\"404\""));
    }

    #[test]
    fn test_related_products_paginate() {
        let products: Vec<Product> = (1..=6).map(|i| watch(&i.to_string(), &format!("Watch {i}"))).collect();
        let store = Store::with_catalog(products).unwrap();
        let config = StorefrontConfig::default();
        let target = store.product(&ProductId::from("1")).unwrap();

        let first = ProductTemplate::new(&store, &config, target, 1);
        assert_eq!(first.related.len(), 4);
        assert_eq!(first.related_total_pages, 2);
        assert!(first.has_next);
        assert!(first.related.iter().all(|card| card.id != "1"));

        let second = ProductTemplate::new(&store, &config, target, 2);
        let ids: Vec<&str> = second.related.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["6"]);
        assert!(second.render().unwrap().contains("Related Products (page 2 of 2)"));
    }

    #[test]
    fn test_in_cart_and_low_stock() {
        let mut store = Store::with_catalog(vec![watch("1", "Watch")]).unwrap();
        let p = store.products()[0].clone();
        store.add_to_cart(&p, NonZeroU32::new(2).unwrap());

        let page = render_product(&store, &StorefrontConfig::default(), &p.id, 1).unwrap();
        assert!(page.contains("In cart:  2"));
        assert!(page.contains("Only 3 left in stock"));
        assert!(page.contains("Cart (2)"));
    }

    #[test]
    fn test_out_of_stock_detail() {
        let mut store = Store::with_catalog(vec![watch("1", "Watch")]).unwrap();
        store.set_product_quantity(&ProductId::from("1"), 0);
        let page = render_product(&store, &StorefrontConfig::default(), &ProductId::from("1"), 1).unwrap();
        assert!(page.contains("Out of stock"));
        assert!(!page.contains("Quantity:"));
    }

    #[test]
    fn test_clamp_selector_quantity() {
        assert_eq!(clamp_selector_quantity(0, 8).map(NonZeroU32::get), Some(1));
        assert_eq!(clamp_selector_quantity(3, 8).map(NonZeroU32::get), Some(3));
        assert_eq!(clamp_selector_quantity(50, 8).map(NonZeroU32::get), Some(8));
        assert_eq!(clamp_selector_quantity(2, 0), None);
    }
}
