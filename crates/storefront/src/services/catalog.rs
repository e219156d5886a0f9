//! Add-product submission.

use std::time::Duration;

use tracing::{debug, instrument};

use producthub_core::ProductId;

use crate::config::StorefrontConfig;
use crate::forms::{FormErrors, ProductForm};
use crate::store::Store;

/// Validates add-product forms and commits them to the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogService {
    delay: Duration,
}

impl CatalogService {
    /// Create a service that waits `delay` between validation and commit.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a service using the configured submission delay.
    #[must_use]
    pub const fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.submit_delay)
    }

    /// Validate the form and, if it passes, append the product after the
    /// submission delay. The store is untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] with one message per failing field.
    #[instrument(skip_all, fields(name = %form.name))]
    pub async fn submit(&self, store: &mut Store, form: &ProductForm) -> Result<ProductId, FormErrors> {
        let candidate = form.validate().inspect_err(|errors| {
            debug!(failing_fields = errors.len(), "Product form rejected");
        })?;

        tokio::time::sleep(self.delay).await;
        Ok(store.add_product(candidate))
    }
}
