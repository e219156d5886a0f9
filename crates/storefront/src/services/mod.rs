//! Asynchronous storefront services.
//!
//! # Services
//!
//! - `auth` - Simulated sign-in and sign-up
//! - `catalog` - Add-product form submission
//!
//! Both services are stateless apart from their artificial delay and act on
//! a [`Store`](crate::store::Store) the caller owns. The caller is
//! responsible for ordering: a session issues one request at a time.

pub mod auth;
pub mod catalog;

pub use auth::{AuthError, AuthService};
pub use catalog::CatalogService;
