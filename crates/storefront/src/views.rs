//! Derived, read-only views over the store.
//!
//! Everything here is a pure function of the current catalog or cart and is
//! recomputed on every read. None of it is cached.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use producthub_core::ProductId;

use crate::models::{Cart, CartLine, Product};

// =============================================================================
// Catalog Views
// =============================================================================

/// Categories present in the catalog, in the order they first appear.
#[must_use]
pub fn distinct_categories(products: &[Product]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for product in products {
        if !categories.contains(&product.category.as_str()) {
            categories.push(&product.category);
        }
    }
    categories
}

/// Products in `category` (or any category when `None`) whose name contains
/// `search`, ignoring case. An empty search matches every name.
#[must_use]
pub fn filter_and_search<'a>(
    products: &'a [Product],
    category: Option<&str>,
    search: &str,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Products sharing the category of `product_id`, excluding that product.
///
/// Unknown ids have no related products.
#[must_use]
pub fn related_products<'a>(products: &'a [Product], product_id: &ProductId) -> Vec<&'a Product> {
    let Some(target) = products.iter().find(|p| &p.id == product_id) else {
        return Vec::new();
    };
    products
        .iter()
        .filter(|p| p.category == target.category && p.id != target.id)
        .collect()
}

/// Listing sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Highest rated first.
    Rating,
}

impl SortOrder {
    /// Every order, for help text.
    pub const ALL: [Self; 4] = [
        Self::Featured,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Rating,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price_asc",
            Self::PriceHighToLow => "price_desc",
            Self::Rating => "rating",
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Customer Rating",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort order name that matches none of [`SortOrder::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}' (expected one of: featured, price_asc, price_desc, rating)")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| UnknownSortOrder(s.to_owned()))
    }
}

/// Reorder products. The sort is stable, so ties keep catalog order.
#[must_use]
pub fn sort_products(mut products: Vec<&Product>, order: SortOrder) -> Vec<&Product> {
    match order {
        SortOrder::Featured => {}
        SortOrder::PriceLowToHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Rating => products.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
    }
    products
}

// =============================================================================
// Pagination
// =============================================================================

/// One page of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page; empty when the page index is out of range.
    pub items: &'a [T],
    /// Requested 1-indexed page.
    pub page_index: usize,
    pub page_size: usize,
    /// Length of the whole sequence.
    pub total_items: usize,
    /// `ceil(total_items / page_size)`, but at least 1.
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    /// Whether a page before this one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    /// Whether a page after this one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

/// Slice `items` into 1-indexed pages of `page_size`.
///
/// Page `n` covers `[(n-1)*size, n*size)` clamped to the sequence. Page 0 or
/// any page past the last one is empty rather than an error, and an empty
/// sequence still reports one page.
#[must_use]
pub fn paginate<T>(items: &[T], page_index: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let total_pages = items.len().div_ceil(size).max(1);

    let slice = page_index
        .checked_sub(1)
        .and_then(|zero_based| zero_based.checked_mul(size))
        .and_then(|start| {
            let end = start.saturating_add(size).min(items.len());
            items.get(start..end)
        })
        .unwrap_or(&[]);

    Page {
        items: slice,
        page_index,
        page_size: size,
        total_items: items.len(),
        total_pages,
    }
}

// =============================================================================
// Cart Views
// =============================================================================

/// Cart badge and subtotal figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub total_items: u64,
    /// Sum of unit price × quantity.
    pub total_price: Decimal,
}

/// Totals over every cart line.
///
/// Amounts saturate at [`Decimal::MAX`].
#[must_use]
pub fn cart_totals(cart: &Cart) -> CartTotals {
    cart.lines()
        .iter()
        .fold(CartTotals::default(), |totals, line| CartTotals {
            total_items: totals
                .total_items
                .saturating_add(u64::from(line.cart_quantity())),
            total_price: totals.total_price.saturating_add(line.line_total()),
        })
}

/// Cart page order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    /// Always free.
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Subtotal, tax at `tax_rate`, free shipping, and the grand total.
#[must_use]
pub fn order_summary(cart: &Cart, tax_rate: Decimal) -> OrderSummary {
    let subtotal = cart_totals(cart).total_price;
    let tax = subtotal.saturating_mul(tax_rate);
    OrderSummary {
        subtotal,
        shipping: Decimal::ZERO,
        tax,
        total: subtotal.saturating_add(tax),
    }
}

/// The first few cart lines for the navigation dropdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartPreview<'a> {
    pub lines: &'a [CartLine],
    /// Lines not shown.
    pub remaining: usize,
}

/// Preview at most `limit` lines of the cart.
#[must_use]
pub fn cart_preview(cart: &Cart, limit: usize) -> CartPreview<'_> {
    let lines = cart.lines();
    let shown = lines.get(..limit.min(lines.len())).unwrap_or(&[]);
    CartPreview {
        lines: shown,
        remaining: lines.len() - shown.len(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroU32;

    use producthub_core::{Price, Rating};

    use super::*;
    use crate::store::Store;

    fn product(id: &str, name: &str, category: &str, price: &str, rating: f64) -> Product {
        Product {
            id: ProductId::from(id),
            image: String::new(),
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            specification: String::new(),
            rating: Rating::new(rating).unwrap(),
            price: Price::parse(price).unwrap(),
            quantity: 10,
        }
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Pro Laptop", "Electronics", "1299.99", 4.8),
            product("2", "Wireless Headphones", "Audio", "349.99", 4.6),
            product("3", "SmartWatch Ultra", "Wearables", "449.99", 4.5),
            product("4", "Gaming Mouse", "Electronics", "59.99", 4.9),
            product("5", "Studio Monitor Speakers", "Audio", "349.99", 4.1),
        ]
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let products = catalog();
        assert_eq!(
            distinct_categories(&products),
            ["Electronics", "Audio", "Wearables"]
        );
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_filter_empty_returns_everything_in_order() {
        let products = catalog();
        let all = filter_and_search(&products, None, "");
        assert_eq!(ids(&all), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = catalog();
        assert_eq!(ids(&filter_and_search(&products, None, "WATCH")), ["3"]);
        assert_eq!(ids(&filter_and_search(&products, None, "o")), ["1", "2", "4", "5"]);
        assert!(filter_and_search(&products, None, "xyz").is_empty());
    }

    #[test]
    fn test_category_and_search_combine() {
        let products = catalog();
        assert_eq!(
            ids(&filter_and_search(&products, Some("Electronics"), "")),
            ["1", "4"]
        );
        assert_eq!(
            ids(&filter_and_search(&products, Some("Electronics"), "mouse")),
            ["4"]
        );
        assert!(filter_and_search(&products, Some("electronics"), "").is_empty());
    }

    #[test]
    fn test_related_products() {
        let products = catalog();
        assert_eq!(
            ids(&related_products(&products, &ProductId::from("2"))),
            ["5"]
        );
        assert!(related_products(&products, &ProductId::from("3")).is_empty());
        assert!(related_products(&products, &ProductId::from("404")).is_empty());
    }

    #[test]
    fn test_sort_products() {
        let products = catalog();
        let all: Vec<&Product> = products.iter().collect();

        assert_eq!(
            ids(&sort_products(all.clone(), SortOrder::Featured)),
            ["1", "2", "3", "4", "5"]
        );
        assert_eq!(
            ids(&sort_products(all.clone(), SortOrder::PriceLowToHigh)),
            ["4", "2", "5", "3", "1"]
        );
        assert_eq!(
            ids(&sort_products(all.clone(), SortOrder::PriceHighToLow)),
            ["1", "3", "2", "5", "4"]
        );
        assert_eq!(
            ids(&sort_products(all, SortOrder::Rating)),
            ["4", "1", "2", "3", "5"]
        );
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("price_asc".parse::<SortOrder>().unwrap(), SortOrder::PriceLowToHigh);
        let err = "cheapest".parse::<SortOrder>().unwrap_err();
        assert_eq!(err, UnknownSortOrder("cheapest".to_string()));
        for order in SortOrder::ALL {
            assert!(err.to_string().contains(order.as_str()));
        }
    }

    #[test]
    fn test_paginate_thirteen_by_six() {
        let items: Vec<u32> = (1..=13).collect();

        let first = paginate(&items, 1, size(6));
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items, &[1, 2, 3, 4, 5, 6]);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 3, size(6));
        assert_eq!(last.items, &[13]);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=13).collect();
        assert!(paginate(&items, 0, size(6)).items.is_empty());
        assert!(paginate(&items, 4, size(6)).items.is_empty());
        assert!(paginate(&items, usize::MAX, size(6)).items.is_empty());
    }

    #[test]
    fn test_paginate_empty_sequence_has_one_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, size(6));
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn test_paginate_never_exceeds_page_size() {
        let items: Vec<u32> = (0..50).collect();
        for page_size in 1..=12 {
            for page_index in 0..=60 {
                let page = paginate(&items, page_index, size(page_size));
                assert!(page.items.len() <= page_size);
            }
        }
    }

    #[test]
    fn test_cart_totals_and_summary() {
        let mut store = Store::with_catalog(vec![product("1", "Thing", "A", "10", 3.0)]).unwrap();
        let p = store.products()[0].clone();
        store.add_to_cart(&p, NonZeroU32::new(2).unwrap());
        store.add_to_cart(&p, NonZeroU32::new(3).unwrap());

        let totals = cart_totals(store.cart());
        assert_eq!(totals.total_items, 5);
        assert_eq!(totals.total_price, Decimal::from(50));

        let summary = order_summary(store.cart(), Decimal::new(10, 2));
        assert_eq!(summary.subtotal, Decimal::from(50));
        assert_eq!(summary.tax, Decimal::from(5));
        assert_eq!(summary.shipping, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::from(55));
    }

    #[test]
    fn test_cart_totals_saturate_on_huge_amounts() {
        let mut store = Store::with_catalog(vec![
            product("1", "Yacht", "A", "50000000000000000000000000000", 1.0),
            product("2", "Island", "A", "50000000000000000000000000000", 1.0),
        ])
        .unwrap();
        for p in store.products().to_vec() {
            store.add_to_cart(&p, NonZeroU32::new(1).unwrap());
        }

        let totals = cart_totals(store.cart());
        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.total_price, Decimal::MAX);

        let summary = order_summary(store.cart(), Decimal::new(10, 2));
        assert_eq!(summary.subtotal, Decimal::MAX);
        assert_eq!(summary.total, Decimal::MAX);
        assert!(summary.tax > Decimal::ZERO);
    }

    #[test]
    fn test_cart_totals_empty() {
        assert_eq!(cart_totals(&Cart::default()), CartTotals::default());
    }

    #[test]
    fn test_cart_preview() {
        let products = catalog();
        let mut store = Store::with_catalog(products.clone()).unwrap();
        for p in &products {
            store.add_to_cart(p, NonZeroU32::new(1).unwrap());
        }

        let preview = cart_preview(store.cart(), 3);
        assert_eq!(preview.lines.len(), 3);
        assert_eq!(preview.remaining, 2);

        let everything = cart_preview(store.cart(), 10);
        assert_eq!(everything.lines.len(), 5);
        assert_eq!(everything.remaining, 0);
    }
}
