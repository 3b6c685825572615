use thiserror::Error;

/// Errors raised while validating product input.
///
/// The messages for missing or malformed form input match what the admin
/// menu form shows.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    #[error("Name is required")]
    NameRequired,
    #[error("Price is required")]
    PriceRequired,
    #[error("Price is not a number")]
    PriceNotANumber,
    #[error("Price cannot be negative: {0}")]
    NegativePrice(f64),
    #[error("Price must be a finite number")]
    PriceNotFinite,
    #[error("Product ID must be positive: {0}")]
    InvalidId(i64),
    #[error("Update must change at least one field")]
    EmptyUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_messages() {
        assert_eq!(ProductError::NameRequired.to_string(), "Name is required");
        assert_eq!(ProductError::PriceRequired.to_string(), "Price is required");
        assert_eq!(
            ProductError::PriceNotANumber.to_string(),
            "Price is not a number"
        );
    }

    #[test]
    fn test_invalid_id_display() {
        assert_eq!(
            ProductError::InvalidId(0).to_string(),
            "Product ID must be positive: 0"
        );
    }

    #[test]
    fn test_negative_price_display() {
        assert_eq!(
            ProductError::NegativePrice(-1.5).to_string(),
            "Price cannot be negative: -1.5"
        );
    }
}
