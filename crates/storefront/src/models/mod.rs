//! Domain models for the storefront session.
//!
//! - [`Product`] / [`NewProduct`] - catalog entries and add-product candidates
//! - [`CartLine`] / [`Cart`] - independent product snapshots with a quantity
//! - [`User`] - the simulated signed-in shopper

pub mod cart;
pub mod product;
pub mod user;

pub use cart::{Cart, CartLine};
pub use product::{NewProduct, Product};
pub use user::User;
