use super::error::ProductError;
use super::types::{NewProduct, Price, ProductUpdate};

/// Parses a price typed into a form field.
pub fn parse_price(input: &str) -> Result<Price, ProductError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ProductError::PriceRequired);
    }
    let amount: f64 = input.parse().map_err(|_| ProductError::PriceNotANumber)?;
    Price::new(amount)
}

/// Validates a product name.
pub fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameRequired);
    }
    Ok(())
}

/// Validates a product identifier. Store identifiers start at 1.
pub fn validate_product_id(id: i64) -> Result<(), ProductError> {
    if id <= 0 {
        return Err(ProductError::InvalidId(id));
    }
    Ok(())
}

/// Validates a product before insertion.
pub fn validate_new_product(product: &NewProduct) -> Result<(), ProductError> {
    validate_name(&product.name)
}

/// Validates an update before it is sent to the store.
pub fn validate_product_update(update: &ProductUpdate) -> Result<(), ProductError> {
    validate_product_id(update.id)?;
    if update.is_empty() {
        return Err(ProductError::EmptyUpdate);
    }
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    Ok(())
}
