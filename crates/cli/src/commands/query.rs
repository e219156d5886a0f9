//! One-shot page renders.
//!
//! # Usage
//!
//! ```bash
//! producthub list --search watch
//! producthub show 1 --page 2
//! producthub categories
//! ```

use std::io::Write;

use producthub_storefront::{AppError, Store, StorefrontConfig, pages, views};

use super::{ListArgs, ShowArgs};

/// Render the product listing.
///
/// # Errors
///
/// Returns an error if the page fails to render or cannot be written.
pub fn list(
    store: &Store,
    config: &StorefrontConfig,
    args: &ListArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let page = pages::render_listing(store, config, &args.to_query())?;
    out.write_all(page.as_bytes())?;
    Ok(())
}

/// Render a product detail page.
///
/// # Errors
///
/// Returns an error if the page fails to render or cannot be written.
pub fn show(
    store: &Store,
    config: &StorefrontConfig,
    args: &ShowArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let page = pages::render_product(store, config, &args.product_id(), args.page)?;
    out.write_all(page.as_bytes())?;
    Ok(())
}

/// Write each catalog category on its own line.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn categories(store: &Store, out: &mut impl Write) -> Result<(), AppError> {
    for category in views::distinct_categories(store.products()) {
        writeln!(out, "{category}")?;
    }
    Ok(())
}
