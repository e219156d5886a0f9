//! Catalog seeding.
//!
//! A new session starts from the built-in starter catalog. A YAML seed file
//! can replace it for demos:
//!
//! ```yaml
//! - id: "1"
//!   image: /modern-laptop-workspace.png
//!   name: Pro Laptop 15"
//!   category: Electronics
//!   description: High-performance laptop for professionals
//!   specification: Intel i7, 16GB RAM, 512GB SSD
//!   rating: 4.8
//!   price: "1299.99"
//!   quantity: 15
//! ```
//!
//! Ratings outside 0-5, negative prices, and duplicate ids are rejected
//! when the file is loaded.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use producthub_core::{Price, ProductId, Rating};

use crate::models::Product;
use crate::store::{Store, StoreError};

/// Errors that can occur when loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML is malformed or a field failed validation.
    #[error("invalid seed file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The products are individually valid but the catalog is not.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] StoreError),
}

/// The fixed catalog every session starts with.
#[must_use]
pub fn starter_products() -> Vec<Product> {
    vec![
        starter(
            "1",
            "/modern-laptop-workspace.png",
            "Pro Laptop 15\"",
            "Electronics",
            "High-performance laptop for professionals",
            "Intel i7, 16GB RAM, 512GB SSD",
            4.8,
            129_999,
            15,
        ),
        starter(
            "2",
            "/wireless-headphones.jpg",
            "Wireless Headphones Pro",
            "Audio",
            "Premium noise-cancelling headphones",
            "40-hour battery, ANC, Bluetooth 5.0",
            4.6,
            34_999,
            8,
        ),
        starter(
            "3",
            "/modern-smartwatch.png",
            "SmartWatch Ultra",
            "Wearables",
            "Feature-rich smartwatch with health tracking",
            "OLED display, 14-day battery, GPS",
            4.5,
            44_999,
            12,
        ),
    ]
}

/// Build a starter product from constants known to be in range.
#[allow(clippy::too_many_arguments)]
fn starter(
    id: &str,
    image: &str,
    name: &str,
    category: &str,
    description: &str,
    specification: &str,
    rating: f64,
    price_cents: i64,
    quantity: u32,
) -> Product {
    Product {
        id: ProductId::from(id),
        image: image.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        specification: specification.to_string(),
        rating: Rating::new(rating).unwrap_or_default(),
        price: Price::new(Decimal::new(price_cents, 2)).unwrap_or(Price::ZERO),
        quantity,
    }
}

/// Parse a YAML catalog.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] for malformed YAML or invalid field values.
pub fn parse_catalog(yaml: &str) -> Result<Vec<Product>, SeedError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a YAML catalog from disk and build a store over it.
///
/// # Errors
///
/// Returns [`SeedError`] if the file cannot be read, fails to parse, or
/// contains duplicate ids.
pub async fn load_store(path: &Path) -> Result<Store, SeedError> {
    info!(path = %path.display(), "Loading catalog seed file");
    let content = tokio::fs::read_to_string(path).await?;
    let products = parse_catalog(&content)?;
    info!(products = products.len(), "Parsed seed catalog");
    Ok(Store::with_catalog(products)?)
}

impl FromStr for Store {
    type Err = SeedError;

    /// Build a store from a YAML catalog string.
    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        Ok(Self::with_catalog(parse_catalog(yaml)?)?)
    }
}
