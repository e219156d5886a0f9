//! Cart page and navbar dropdown preview.

use askama::Template;
use rust_decimal::Decimal;

use producthub_core::{CurrencyCode, format_amount};

use crate::config::StorefrontConfig;
use crate::filters;
use crate::models::CartLine;
use crate::store::Store;
use crate::views::{cart_preview, cart_totals, order_summary};

use super::{NavbarView, render};

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl CartLineView {
    fn new(line: &CartLine, currency: CurrencyCode) -> Self {
        Self {
            id: line.id().to_string(),
            name: line.product.name.clone(),
            category: line.product.category.clone(),
            quantity: line.cart_quantity(),
            unit_price: line.product.price.display(currency),
            line_total: format_amount(line.line_total(), currency),
        }
    }
}

/// Order summary display data.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub subtotal: String,
    pub shipping: String,
    pub tax_percent: String,
    pub tax: String,
    pub total: String,
}

/// Cart page template.
#[derive(Template)]
#[template(path = "cart.txt")]
pub struct CartTemplate {
    pub navbar: NavbarView,
    pub title: &'static str,
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub summary: SummaryView,
}

impl CartTemplate {
    /// Build the cart page for the current session.
    #[must_use]
    pub fn new(store: &Store, config: &StorefrontConfig) -> Self {
        let currency = config.currency;
        let summary = order_summary(store.cart(), config.tax_rate);

        Self {
            navbar: NavbarView::new(store),
            title: "Shopping Cart",
            lines: store
                .cart()
                .lines()
                .iter()
                .map(|line| CartLineView::new(line, currency))
                .collect(),
            item_count: cart_totals(store.cart()).total_items,
            summary: SummaryView {
                subtotal: format_amount(summary.subtotal, currency),
                shipping: if summary.shipping.is_zero() {
                    "Free".to_string()
                } else {
                    format_amount(summary.shipping, currency)
                },
                tax_percent: config
                    .tax_rate
                    .saturating_mul(Decimal::ONE_HUNDRED)
                    .normalize()
                    .to_string(),
                tax: format_amount(summary.tax, currency),
                total: format_amount(summary.total, currency),
            },
        }
    }
}

/// Navbar cart dropdown template.
#[derive(Template)]
#[template(path = "cart_preview.txt")]
pub struct CartPreviewTemplate {
    pub lines: Vec<CartLineView>,
    /// Lines beyond the preview limit.
    pub remaining: usize,
    pub item_count: u64,
    pub total: String,
}

impl CartPreviewTemplate {
    /// Build the dropdown for the current cart.
    #[must_use]
    pub fn new(store: &Store, config: &StorefrontConfig) -> Self {
        let preview = cart_preview(store.cart(), config.cart_preview_limit);
        let totals = cart_totals(store.cart());

        Self {
            lines: preview
                .lines
                .iter()
                .map(|line| CartLineView::new(line, config.currency))
                .collect(),
            remaining: preview.remaining,
            item_count: totals.total_items,
            total: format_amount(totals.total_price, config.currency),
        }
    }
}

/// Render the cart page.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_cart(store: &Store, config: &StorefrontConfig) -> askama::Result<String> {
    render(&CartTemplate::new(store, config))
}

/// Render the navbar cart dropdown.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_cart_preview(store: &Store, config: &StorefrontConfig) -> askama::Result<String> {
    render(&CartPreviewTemplate::new(store, config))
}
