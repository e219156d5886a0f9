//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Uppercased first letter, for the navbar avatar badge.
///
/// Usage in templates: `{{ navbar.user_name|initial }}`
#[askama::filter_fn]
pub fn initial(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value
        .to_string()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default())
}

/// A line of `=` as wide as the value, for underlining headings.
///
/// Usage in templates: `{{ title|underline }}`
#[askama::filter_fn]
pub fn underline(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok("=".repeat(value.to_string().chars().count()))
}
