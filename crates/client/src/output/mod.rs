//! Output rendering for CLI results.

pub mod pretty;

use pizzeria_core::product::Product;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Render a single product in the requested format.
pub fn render_product(product: &Product, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(product)?,
        OutputFormat::Pretty => pretty::format_product(product),
    })
}

/// Render a product list in the requested format.
pub fn render_products(products: &[Product], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(products)?,
        OutputFormat::Pretty => pretty::format_products(products),
    })
}
