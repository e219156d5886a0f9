//! CLI command implementations.

pub mod query;
pub mod shell;

use clap::Args;

use producthub_core::ProductId;
use producthub_storefront::pages::ListingQuery;
use producthub_storefront::views::SortOrder;

/// Listing page controls.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Only show this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive product name search
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order (featured, `price_asc`, `price_desc`, rating)
    #[arg(long, default_value_t)]
    pub sort: SortOrder,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

impl ListArgs {
    /// Listing query for these arguments.
    #[must_use]
    pub fn to_query(&self) -> ListingQuery {
        ListingQuery {
            category: self.category.clone(),
            search: self.search.clone(),
            sort: self.sort,
            page: self.page,
        }
    }
}

/// Product page controls.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Product ID
    pub id: String,

    /// Related products page, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

impl ShowArgs {
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        ProductId::from(self.id.as_str())
    }
}
