//! ProductHub Storefront library.
//!
//! Holds one browsing session's state in a [`Store`](store::Store): the
//! product catalog, the cart, and an optional simulated user. Everything a
//! shopper sees is a read-only projection of that store, computed by the
//! pure functions in [`views`] and rendered by [`pages`].
//!
//! # Architecture
//!
//! - [`store`] - the catalog/cart store and its six mutations
//! - [`views`] - filtering, search, sorting, pagination, and cart aggregation
//! - [`forms`] - add-product form validation (runs before the store is touched)
//! - [`services`] - simulated sign-in/sign-up and product submission with delays
//! - [`pages`] - askama text templates for listing, detail, and cart pages
//! - [`seed`] - starter catalog and YAML seed files
//! - [`config`] - environment configuration
//!
//! The store is owned by a single session and handed to consumers by
//! reference. There is no global state and no I/O inside the store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
mod filters;
pub mod forms;
pub mod models;
pub mod pages;
pub mod seed;
pub mod services;
pub mod store;
pub mod views;

pub use config::StorefrontConfig;
pub use error::AppError;
pub use store::Store;
