//! Product listing page.

use askama::Template;
use tracing::debug;

use crate::config::StorefrontConfig;
use crate::filters;
use crate::store::Store;
use crate::views::{SortOrder, distinct_categories, filter_and_search, paginate, sort_products};

use super::{NavbarView, ProductCard, render};

/// Listing page controls: category chip, search box, sort menu, and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Selected category, or `None` for "All".
    pub category: Option<String>,
    pub search: String,
    pub sort: SortOrder,
    /// 1-indexed page.
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: String::new(),
            sort: SortOrder::default(),
            page: 1,
        }
    }
}

/// Category filter chip.
#[derive(Debug, Clone)]
pub struct CategoryChip {
    pub name: String,
    pub selected: bool,
}

/// Product listing page template.
#[derive(Template)]
#[template(path = "listing.txt")]
pub struct ListingTemplate {
    pub navbar: NavbarView,
    pub title: &'static str,
    pub search: String,
    pub categories: Vec<CategoryChip>,
    pub sort_name: &'static str,
    pub cards: Vec<ProductCard>,
    pub total_items: usize,
    pub page_index: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl ListingTemplate {
    /// Build the listing for `query` over the current catalog.
    #[must_use]
    pub fn new(store: &Store, config: &StorefrontConfig, query: &ListingQuery) -> Self {
        let products = store.products();
        let selected = query.category.as_deref();

        let categories = std::iter::once(CategoryChip {
            name: "All".to_string(),
            selected: selected.is_none(),
        })
        .chain(distinct_categories(products).into_iter().map(|name| CategoryChip {
            name: name.to_string(),
            selected: selected == Some(name),
        }))
        .collect();

        let matching = sort_products(filter_and_search(products, selected, &query.search), query.sort);
        let page = paginate(&matching, query.page, config.page_size);
        debug!(
            matching = page.total_items,
            page = page.page_index,
            total_pages = page.total_pages,
            "Listing computed"
        );

        Self {
            navbar: NavbarView::new(store),
            title: "Products",
            search: query.search.clone(),
            categories,
            sort_name: query.sort.display_name(),
            cards: page.items.iter().map(|p| ProductCard::new(p, config)).collect(),
            total_items: page.total_items,
            page_index: page.page_index,
            total_pages: page.total_pages,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}

/// Render the product listing page.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_listing(
    store: &Store,
    config: &StorefrontConfig,
    query: &ListingQuery,
) -> askama::Result<String> {
    render(&ListingTemplate::new(store, config, query))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    #[test]
    fn test_default_listing() {
        let store = Store::new();
        let page = render_listing(&store, &StorefrontConfig::default(), &ListingQuery::default()).unwrap();

        assert!(page.contains("ProductHub"));
        assert!(page.contains("Sign In | Sign Up"));
        assert!(page.contains("[All]"));
        assert!(page.contains("Pro Laptop 15\""));
        assert!(page.contains("SmartWatch Ultra"));
        assert!(page.contains("₱1299.99"));
        assert!(page.contains("Page 1 of 1"));
    }

    #[test]
    fn test_category_and_search() {
        let store = Store::new();
        let query = ListingQuery {
            category: Some("Wearables".to_string()),
            search: "WATCH".to_string(),
            ..ListingQuery::default()
        };
        let template = ListingTemplate::new(&store, &StorefrontConfig::default(), &query);

        assert_eq!(template.cards.len(), 1);
        assert_eq!(template.cards[0].name, "SmartWatch Ultra");
        let selected: Vec<&str> = template
            .categories
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(selected, ["Wearables"]);

        let page = template.render().unwrap();
        assert!(page.contains("Search: \"WATCH\""));
        assert!(page.contains("[Wearables]"));
    }

    #[test]
    fn test_empty_state() {
        let store = Store::new();
        let query = ListingQuery {
            search: "toaster".to_string(),
            ..ListingQuery::default()
        };
        let page = render_listing(&store, &StorefrontConfig::default(), &query).unwrap();
        assert!(page.contains("No products found matching your criteria."));
    }

    #[test]
    fn test_sort_and_pagination() {
        let store = Store::new();
        let config = StorefrontConfig {
            page_size: NonZeroUsize::new(2).unwrap(),
            ..StorefrontConfig::default()
        };
        let query = ListingQuery {
            sort: SortOrder::PriceLowToHigh,
            page: 2,
            ..ListingQuery::default()
        };
        let template = ListingTemplate::new(&store, &config, &query);

        assert_eq!(template.total_pages, 2);
        assert!(template.has_previous);
        assert!(!template.has_next);
        let names: Vec<&str> = template.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Pro Laptop 15\""]);

        let page = template.render().unwrap();
        assert!(page.contains("Sort: Price: Low to High"));
        assert!(page.contains("Page 2 of 2"));
    }
}
