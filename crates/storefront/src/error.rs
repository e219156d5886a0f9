//! Unified error handling.
//!
//! Provides a unified `AppError` type for operations that cross module
//! boundaries, such as loading a session or rendering a page. Individual
//! modules keep their own narrow error enums and convert with `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::forms::FormErrors;
use crate::seed::SeedError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Seed catalog could not be loaded.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// A page template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Add-product form failed validation.
    #[error("Invalid product: {0}")]
    Invalid(#[from] FormErrors),

    /// No product with this id exists.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Session snapshot could not be serialized.
    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the error came from user input rather than the environment.
    ///
    /// User errors are reported and the session continues; the rest abort.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::Invalid(_) | Self::NotFound(_))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(AppError::NotFound("9".to_string()).is_user_error());
        assert!(AppError::Auth(AuthError::MissingPassword).is_user_error());
        assert!(AppError::Invalid(FormErrors::default()).is_user_error());
        assert!(
            !AppError::Config(ConfigError::InvalidEnvVar("X".to_string(), "bad".to_string()))
                .is_user_error()
        );
    }

    #[test]
    fn test_display() {
        let err = AppError::from(AuthError::MissingPassword);
        assert_eq!(err.to_string(), "Auth error: password is required");
        assert_eq!(
            AppError::NotFound("42".to_string()).to_string(),
            "Product not found: 42"
        );
    }
}
