//! Pure helpers for interpreting rows returned by filtered store calls.

use crate::product::Product;

use super::{RepositoryError, Result};

const ENTITY: &str = "Product";

/// Reduces the rows matched by an `id == id` filter to exactly one product.
///
/// Zero rows is `NotFound`; more than one is `MultipleRows`.
pub fn single_row(mut rows: Vec<Product>, id: i64) -> Result<Product> {
    match rows.len() {
        0 => Err(RepositoryError::NotFound {
            entity_type: ENTITY,
            id: id.to_string(),
        }),
        1 => Ok(rows.remove(0)),
        count => Err(RepositoryError::MultipleRows {
            entity_type: ENTITY,
            id: id.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Price;

    fn product(id: i64) -> Product {
        Product::new(id, "Margherita", Price::new(9.99).unwrap())
    }

    #[test]
    fn test_single_row_returns_the_row() {
        assert_eq!(single_row(vec![product(3)], 3).unwrap(), product(3));
    }

    #[test]
    fn test_single_row_empty_is_not_found() {
        let err = single_row(vec![], 3).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::NotFound {
                entity_type: "Product",
                id: "3".to_string()
            }
        );
    }

    #[test]
    fn test_single_row_many_is_multiple_rows() {
        let err = single_row(vec![product(3), product(3)], 3).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::MultipleRows {
                entity_type: "Product",
                id: "3".to_string(),
                count: 2
            }
        );
    }
}
