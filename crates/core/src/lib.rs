//! ProductHub Core - Shared domain types.
//!
//! This crate provides the value types used across all ProductHub components:
//! - `storefront` - Catalog/cart store, views, and page rendering
//! - `cli` - Interactive session shell
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clocks, no rendering.
//! Every constructor that can fail validates its input and returns a typed
//! error, so the rest of the workspace can trust values once built.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, ratings, emails, and stock status

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
