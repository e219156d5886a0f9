//! Product domain types.

use serde::{Deserialize, Serialize};

use producthub_core::{Price, ProductId, Rating, StockStatus};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within the catalog.
    pub id: ProductId,
    /// Image reference (URL or asset path).
    pub image: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub specification: String,
    pub rating: Rating,
    pub price: Price,
    /// Stock on hand.
    pub quantity: u32,
}

impl Product {
    /// Stock availability for the given low-stock threshold.
    #[must_use]
    pub const fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        StockStatus::from_quantity(self.quantity, low_stock_threshold)
    }
}

/// A product candidate that has not been assigned an id yet.
///
/// Produced by [`ProductForm::validate`](crate::forms::ProductForm::validate)
/// and consumed by [`Store::add_product`](crate::store::Store::add_product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub image: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub specification: String,
    pub rating: Rating,
    pub price: Price,
    pub quantity: u32,
}

impl NewProduct {
    /// Attach an id, producing a catalog product.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            image: self.image,
            name: self.name,
            category: self.category,
            description: self.description,
            specification: self.specification,
            rating: self.rating,
            price: self.price,
            quantity: self.quantity,
        }
    }
}
