//! Pretty output formatting.

use pizzeria_core::product::Product;

/// Format a product for display.
pub fn format_product(product: &Product) -> String {
    format!(
        "{} ({})\n  ID: {}\n  Image: {}",
        product.name,
        product.price,
        product.id,
        product.display_image()
    )
}

/// Format the menu for display.
pub fn format_products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }
    let mut output = format!("MENU ({})\n", products.len());
    output.push_str(&"-".repeat(40));
    for product in products {
        output.push_str(&format!("\n{}", format_product(product)));
        output.push('\n');
    }
    output
}
