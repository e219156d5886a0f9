//! Simulated authentication.
//!
//! There is no backend: any well-formed email with a non-empty password is
//! accepted after a short artificial delay, and the resulting [`User`] is
//! installed in the store by the caller. Passwords are held as
//! [`SecretString`] so they never reach logs or `Debug` output, and are
//! discarded once checked.

mod error;

pub use error::AuthError;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};

use producthub_core::Email;

use crate::config::StorefrontConfig;
use crate::models::User;

/// Simulated authentication service.
#[derive(Debug, Clone, Copy)]
pub struct AuthService {
    delay: Duration,
}

impl AuthService {
    /// Create a service that waits `delay` before completing each request.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a service using the configured authentication delay.
    #[must_use]
    pub const fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.auth_delay)
    }

    // =========================================================================
    // Sign In / Sign Up
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// The display name is the part of the email before `@`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::MissingPassword` if the password is empty.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let email = validate(email, password)?;
        tokio::time::sleep(self.delay).await;

        let user = User::new(email, None);
        info!(user_id = %user.id, "Sign-in completed");
        Ok(user)
    }

    /// Sign up with a display name, email, and password.
    ///
    /// A blank name falls back to the part of the email before `@`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::MissingPassword` if the password is empty.
    #[instrument(skip(self, password))]
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<User, AuthError> {
        let email = validate(email, password)?;
        tokio::time::sleep(self.delay).await;

        let user = User::new(email, Some(name));
        info!(user_id = %user.id, "Sign-up completed");
        Ok(user)
    }
}

fn validate(email: &str, password: &SecretString) -> Result<Email, AuthError> {
    let email = Email::parse(email)?;
    if password.expose_secret().is_empty() {
        return Err(AuthError::MissingPassword);
    }
    Ok(email)
}
