//! Add-product form validation.
//!
//! The store trusts whatever it is given, so every rule for a new product
//! lives here. All fields are checked in one pass and each failing field
//! gets its own message, so the form can show every problem at once and
//! stay editable.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use producthub_core::{Price, Rating};

use crate::models::NewProduct;

/// Categories offered by the add-product form. Other values are accepted.
pub const SUGGESTED_CATEGORIES: [&str; 5] = ["Electronics", "Audio", "Wearables", "Accessories", "Other"];

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    Image,
    Name,
    Category,
    Description,
    Specification,
    Rating,
    Price,
    Quantity,
}

impl ProductField {
    /// Form field name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Name => "name",
            Self::Category => "category",
            Self::Description => "description",
            Self::Specification => "specification",
            Self::Rating => "rating",
            Self::Price => "price",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summarize(.0))]
pub struct FormErrors(BTreeMap<ProductField, &'static str>);

impl FormErrors {
    /// Message for one field, if it failed.
    #[must_use]
    pub fn get(&self, field: ProductField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Failing fields and their messages, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, field: ProductField, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// `field: message` pairs joined with `; `.
fn summarize(errors: &BTreeMap<ProductField, &'static str>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw add-product form input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub image: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub specification: String,
    pub rating: String,
    pub price: String,
    pub quantity: String,
}

impl Default for ProductForm {
    /// An empty form with the rating pre-filled to 5.
    fn default() -> Self {
        Self {
            image: String::new(),
            name: String::new(),
            category: String::new(),
            description: String::new(),
            specification: String::new(),
            rating: "5".to_string(),
            price: String::new(),
            quantity: String::new(),
        }
    }
}

impl ProductForm {
    /// Validate every field and build the product candidate.
    ///
    /// Quantity must be a whole positive number: `"2.5"` is rejected rather
    /// than truncated to 2.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing every failing field.
    pub fn validate(&self) -> Result<NewProduct, FormErrors> {
        let mut errors = FormErrors::default();

        let required = [
            (ProductField::Image, &self.image, "Image URL is required"),
            (ProductField::Name, &self.name, "Product name is required"),
            (ProductField::Category, &self.category, "Category is required"),
            (ProductField::Description, &self.description, "Description is required"),
            (ProductField::Specification, &self.specification, "Specification is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(field, message);
            }
        }

        let price = Price::parse(&self.price)
            .ok()
            .filter(|p| !p.amount().is_zero());
        if price.is_none() {
            errors.insert(ProductField::Price, "Valid price is required");
        }

        let quantity = self.quantity.trim().parse::<u32>().ok().filter(|q| *q > 0);
        if quantity.is_none() {
            errors.insert(ProductField::Quantity, "Valid quantity is required");
        }

        let rating = Rating::parse(&self.rating).ok();
        if rating.is_none() {
            errors.insert(ProductField::Rating, "Rating must be between 0 and 5");
        }

        match (price, quantity, rating) {
            (Some(price), Some(quantity), Some(rating)) if errors.is_empty() => Ok(NewProduct {
                image: self.image.clone(),
                name: self.name.clone(),
                category: self.category.clone(),
                description: self.description.clone(),
                specification: self.specification.clone(),
                rating,
                price,
                quantity,
            }),
            _ => Err(errors),
        }
    }
}
