//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during simulated authentication.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] producthub_core::EmailError),

    /// No password was entered.
    #[error("password is required")]
    MissingPassword,
}
