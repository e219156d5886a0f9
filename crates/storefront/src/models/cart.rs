//! Cart domain types.
//!
//! A cart line owns a copy of the product as it was when first added, so
//! later catalog edits never reach into the cart.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::Serialize;

use producthub_core::ProductId;

use super::Product;

/// One product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    /// Snapshot of the product at first add-to-cart.
    #[serde(flatten)]
    pub product: Product,
    cart_quantity: NonZeroU32,
}

impl CartLine {
    /// Create a line from a product snapshot.
    #[must_use]
    pub fn new(product: Product, cart_quantity: NonZeroU32) -> Self {
        Self {
            product,
            cart_quantity,
        }
    }

    /// Product id of this line.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Number of units in the cart (always at least one).
    #[must_use]
    pub const fn cart_quantity(&self) -> u32 {
        self.cart_quantity.get()
    }

    /// Unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.times(self.cart_quantity())
    }
}

/// The shopping cart: at most one line per product id, in first-added order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// All lines in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for a product, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add units of a product; an existing line's quantity grows by `quantity`.
    ///
    /// Returns the line's resulting quantity.
    pub(crate) fn add(&mut self, product: &Product, quantity: NonZeroU32) -> NonZeroU32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == &product.id) {
            line.cart_quantity = line.cart_quantity.saturating_add(quantity.get());
            return line.cart_quantity;
        }
        self.lines.push(CartLine::new(product.clone(), quantity));
        quantity
    }

    /// Overwrite a line's quantity. Returns `false` if there is no such line.
    pub(crate) fn set_quantity(&mut self, id: &ProductId, quantity: NonZeroU32) -> bool {
        match self.lines.iter_mut().find(|line| line.id() == id) {
            Some(line) => {
                line.cart_quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` if there was no such line.
    pub(crate) fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }
}
