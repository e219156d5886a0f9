//! Core types for ProductHub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod rating;
pub mod stock;

pub use email::{Email, EmailError};
pub use id::{ProductId, UserId};
pub use price::{CurrencyCode, Price, PriceError, format_amount};
pub use rating::{Rating, RatingError};
pub use stock::{DEFAULT_LOW_STOCK_THRESHOLD, StockStatus};
