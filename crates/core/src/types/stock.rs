//! Stock availability derived from quantity on hand.

use serde::{Deserialize, Serialize};

/// Quantity below which a product is shown as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Availability of a product, derived from its stock quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Nothing left; add-to-cart is disabled in the pages.
    OutOfStock,
    /// Fewer than the low-stock threshold remain.
    LowStock(u32),
    /// Plenty left.
    InStock(u32),
}

impl StockStatus {
    /// Classify a stock quantity against a low-stock threshold.
    #[must_use]
    pub const fn from_quantity(quantity: u32, low_stock_threshold: u32) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if quantity < low_stock_threshold {
            Self::LowStock(quantity)
        } else {
            Self::InStock(quantity)
        }
    }

    /// Whether the product can still be added to a cart.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !matches!(self, Self::OutOfStock)
    }

    /// Whether to show the low-stock badge.
    #[must_use]
    pub const fn is_low(&self) -> bool {
        matches!(self, Self::LowStock(_))
    }

    /// Human-readable label for product pages.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::OutOfStock => "Out of stock".to_string(),
            Self::LowStock(n) => format!("Only {n} left in stock"),
            Self::InStock(n) => format!("{n} in stock"),
        }
    }
}
