mod error;
mod types;
mod validation;

pub use error::ProductError;
pub use types::{NewProduct, Price, Product, ProductChanges, ProductUpdate, DEFAULT_PRODUCT_IMAGE};
pub use validation::{
    parse_price, validate_name, validate_new_product, validate_product_id,
    validate_product_update,
};
