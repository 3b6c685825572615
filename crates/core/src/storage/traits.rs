use async_trait::async_trait;

use crate::product::{NewProduct, Product, ProductUpdate};

use super::Result;

/// The remote `products` collection.
///
/// Each method is one remote call. Filtered operations return every row the
/// store matched so callers decide what zero or several rows mean.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Selects every product, ordered by ascending ID (insertion order).
    async fn select_products(&self) -> Result<Vec<Product>>;

    /// Selects the products whose ID equals `id`.
    async fn select_product(&self, id: i64) -> Result<Vec<Product>>;

    /// Inserts a product and returns the stored row, including its new ID.
    async fn insert_product(&self, product: &NewProduct) -> Result<Product>;

    /// Applies `update` to the products whose ID equals `update.id` and
    /// returns the updated rows.
    async fn update_product(&self, update: &ProductUpdate) -> Result<Vec<Product>>;

    /// Deletes the products whose ID equals `id`. Matching nothing is not an error.
    async fn delete_product(&self, id: i64) -> Result<()>;
}
