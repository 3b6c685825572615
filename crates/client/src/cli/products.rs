//! Product CLI commands.

use clap::{Parser, Subcommand};
use pizzeria_core::product::{
    parse_price, validate_name, NewProduct, ProductError, ProductUpdate,
};

/// Menu item management commands.
#[derive(Debug, Parser)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub action: ProductsAction,
}

/// Available product actions.
#[derive(Debug, Subcommand)]
pub enum ProductsAction {
    /// List all products.
    List,
    /// Get product by ID.
    Get {
        /// Product ID.
        id: i64,
    },
    /// Create a new product.
    Create {
        /// Product name.
        #[arg(long)]
        name: String,
        /// Price, e.g. 9.99.
        #[arg(long)]
        price: String,
        /// Image URI.
        #[arg(long)]
        image: Option<String>,
    },
    /// Update a product.
    Update {
        /// Product ID.
        id: i64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New price.
        #[arg(long)]
        price: Option<String>,
        /// New image URI.
        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,
        /// Remove the product's image.
        #[arg(long)]
        clear_image: bool,
    },
    /// Delete product by ID.
    Delete {
        /// Product ID.
        id: i64,
    },
}

/// Build an insert payload from raw form input.
///
/// Checks run in form order: name first, then price.
pub fn new_product(
    name: &str,
    price: &str,
    image: Option<String>,
) -> Result<NewProduct, ProductError> {
    validate_name(name)?;
    let mut product = NewProduct::new(name.trim(), parse_price(price)?);
    product.image = image;
    Ok(product)
}

/// Build an update from raw form input. Omitted fields stay unchanged.
pub fn product_update(
    id: i64,
    name: Option<String>,
    price: Option<&str>,
    image: Option<String>,
    clear_image: bool,
) -> Result<ProductUpdate, ProductError> {
    let mut update = ProductUpdate::new(id);
    if let Some(name) = name {
        validate_name(&name)?;
        update = update.with_name(name.trim());
    }
    if let Some(price) = price {
        update = update.with_price(parse_price(price)?);
    }
    if let Some(image) = image {
        update = update.with_image(image);
    } else if clear_image {
        update = update.clear_image();
    }
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use pizzeria_core::product::Price;

    fn parse_action(args: &[&str]) -> ProductsAction {
        let base = ["pizzeria-client", "--store-url", "http://localhost", "--api-key", "k", "products"];
        let cli = Cli::try_parse_from(base.iter().chain(args)).unwrap();
        match cli.command {
            Commands::Products(cmd) => cmd.action,
        }
    }

    #[test]
    fn test_parse_create() {
        let action = parse_action(&["create", "--name", "Margherita", "--price", "9.99"]);
        match action {
            ProductsAction::Create { name, price, image } => {
                assert_eq!(name, "Margherita");
                assert_eq!(price, "9.99");
                assert_eq!(image, None);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_parse_update_partial() {
        let action = parse_action(&["update", "1", "--price", "10.99"]);
        match action {
            ProductsAction::Update {
                id,
                name,
                price,
                image,
                clear_image,
            } => {
                assert_eq!(id, 1);
                assert_eq!(name, None);
                assert_eq!(price.as_deref(), Some("10.99"));
                assert_eq!(image, None);
                assert!(!clear_image);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_parse_update_clear_image() {
        let action = parse_action(&["update", "1", "--clear-image"]);
        assert!(matches!(
            action,
            ProductsAction::Update {
                clear_image: true,
                image: None,
                ..
            }
        ));
    }

    #[test]
    fn test_clear_image_conflicts_with_image() {
        let base = ["pizzeria-client", "--store-url", "http://localhost", "--api-key", "k"];
        let args = ["products", "update", "1", "--image", "m.png", "--clear-image"];
        assert!(Cli::try_parse_from(base.iter().chain(args.iter())).is_err());
    }

    #[test]
    fn test_new_product_from_form() {
        let product = new_product(" Margherita ", "9.99", None).unwrap();
        assert_eq!(product, NewProduct::new("Margherita", Price::new(9.99).unwrap()));
    }

    #[test]
    fn test_new_product_checks_name_before_price() {
        assert_eq!(new_product("", "", None), Err(ProductError::NameRequired));
        assert_eq!(
            new_product("Margherita", "", None),
            Err(ProductError::PriceRequired)
        );
        assert_eq!(
            new_product("Margherita", "abc", None),
            Err(ProductError::PriceNotANumber)
        );
    }

    #[test]
    fn test_product_update_from_form() {
        let update = product_update(1, None, Some("10.99"), Some("m.png".to_string()), false).unwrap();
        assert_eq!(
            update,
            ProductUpdate::new(1)
                .with_price(Price::new(10.99).unwrap())
                .with_image("m.png")
        );
    }

    #[test]
    fn test_product_update_clears_image() {
        let update = product_update(1, None, None, None, true).unwrap();
        assert_eq!(update, ProductUpdate::new(1).clear_image());
    }

    #[test]
    fn test_product_update_rejects_blank_name() {
        assert_eq!(
            product_update(1, Some(" ".to_string()), None, None, false),
            Err(ProductError::NameRequired)
        );
    }
}
