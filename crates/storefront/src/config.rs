//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `PRODUCTHUB_PAGE_SIZE` - Products per listing page (default: 6)
//! - `PRODUCTHUB_RELATED_PAGE_SIZE` - Related products per page on detail pages (default: 4)
//! - `PRODUCTHUB_LOW_STOCK_THRESHOLD` - Stock below this shows "Only N left" (default: 5)
//! - `PRODUCTHUB_TAX_RATE` - Tax rate applied to the cart subtotal (default: 0.10)
//! - `PRODUCTHUB_CURRENCY` - Display currency code (default: PHP)
//! - `PRODUCTHUB_AUTH_DELAY_MS` - Simulated sign-in/sign-up delay (default: 800)
//! - `PRODUCTHUB_SUBMIT_DELAY_MS` - Simulated product submission delay (default: 500)
//! - `PRODUCTHUB_CART_PREVIEW_LIMIT` - Lines shown in the cart dropdown (default: 3)

use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use producthub_core::{CurrencyCode, DEFAULT_LOW_STOCK_THRESHOLD};

const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(6).expect("6 is non-zero");
const DEFAULT_RELATED_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(4).expect("4 is non-zero");
const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(800);
const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(500);
const DEFAULT_CART_PREVIEW_LIMIT: usize = 3;
/// Ten percent, as in the cart page order summary.
const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Products per page on the listing page
    pub page_size: NonZeroUsize,
    /// Related products per page on the product detail page
    pub related_page_size: NonZeroUsize,
    /// Quantities below this are shown as low stock
    pub low_stock_threshold: u32,
    /// Tax rate for the order summary
    pub tax_rate: Decimal,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// Simulated sign-in/sign-up latency
    pub auth_delay: Duration,
    /// Simulated add-product latency
    pub submit_delay: Duration,
    /// Number of cart lines shown in the dropdown preview
    pub cart_preview_limit: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            related_page_size: DEFAULT_RELATED_PAGE_SIZE,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            tax_rate: DEFAULT_TAX_RATE,
            currency: CurrencyCode::default(),
            auth_delay: DEFAULT_AUTH_DELAY,
            submit_delay: DEFAULT_SUBMIT_DELAY,
            cart_preview_limit: DEFAULT_CART_PREVIEW_LIMIT,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed or is
    /// out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `from_env` uses the process environment; tests pass a map.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let page_size = parse_or("PRODUCTHUB_PAGE_SIZE", &lookup, defaults.page_size)?;
        let related_page_size = parse_or(
            "PRODUCTHUB_RELATED_PAGE_SIZE",
            &lookup,
            defaults.related_page_size,
        )?;
        let low_stock_threshold = parse_or(
            "PRODUCTHUB_LOW_STOCK_THRESHOLD",
            &lookup,
            defaults.low_stock_threshold,
        )?;
        let tax_rate = parse_or("PRODUCTHUB_TAX_RATE", &lookup, defaults.tax_rate)?;
        if tax_rate.is_sign_negative() && !tax_rate.is_zero() {
            return Err(ConfigError::InvalidEnvVar(
                "PRODUCTHUB_TAX_RATE".to_string(),
                "must not be negative".to_string(),
            ));
        }
        let currency = parse_or("PRODUCTHUB_CURRENCY", &lookup, defaults.currency)?;
        let auth_delay = parse_millis_or("PRODUCTHUB_AUTH_DELAY_MS", &lookup, defaults.auth_delay)?;
        let submit_delay =
            parse_millis_or("PRODUCTHUB_SUBMIT_DELAY_MS", &lookup, defaults.submit_delay)?;
        let cart_preview_limit = parse_or(
            "PRODUCTHUB_CART_PREVIEW_LIMIT",
            &lookup,
            defaults.cart_preview_limit,
        )?;

        Ok(Self {
            page_size,
            related_page_size,
            low_stock_threshold,
            tax_rate,
            currency,
            auth_delay,
            submit_delay,
            cart_preview_limit,
        })
    }

    /// Same configuration with both simulated delays removed.
    #[must_use]
    pub fn without_delays(mut self) -> Self {
        self.auth_delay = Duration::ZERO;
        self.submit_delay = Duration::ZERO;
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if present, otherwise use the default.
fn parse_or<T>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Parse a millisecond duration if present, otherwise use the default.
fn parse_millis_or(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match lookup(key) {
        Some(_) => parse_or(key, lookup, 0_u64).map(Duration::from_millis),
        None => Ok(default),
    }
}
