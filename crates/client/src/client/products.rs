//! Product store operations over REST.

use async_trait::async_trait;
use pizzeria_core::product::{NewProduct, Product, ProductUpdate};
use pizzeria_core::storage::{ProductStore, Result};
use reqwest::Method;

use super::{id_filter, RestProductStore};
use crate::error::ClientError;

/// Asks the store to echo written rows back in the response body.
const RETURN_REPRESENTATION: (&str, &str) = ("Prefer", "return=representation");

#[async_trait]
impl ProductStore for RestProductStore {
    async fn select_products(&self) -> Result<Vec<Product>> {
        let request = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "id.asc")]);
        Ok(self.fetch_rows(request).await?)
    }

    async fn select_product(&self, id: i64) -> Result<Vec<Product>> {
        let request = self
            .request(Method::GET)
            .query(&[("select", "*")])
            .query(&id_filter(id));
        Ok(self.fetch_rows(request).await?)
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<Product> {
        let request = self
            .request(Method::POST)
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(product);
        let rows = self.fetch_rows(request).await?;
        let created = rows.into_iter().next().ok_or_else(|| {
            ClientError::InvalidResponse("insert returned no rows".to_string())
        })?;
        tracing::debug!(product_id = created.id, "Inserted product");
        Ok(created)
    }

    async fn update_product(&self, update: &ProductUpdate) -> Result<Vec<Product>> {
        let request = self
            .request(Method::PATCH)
            .query(&id_filter(update.id))
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(&update.changes());
        Ok(self.fetch_rows(request).await?)
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        let request = self.request(Method::DELETE).query(&id_filter(id));
        Ok(self.execute(request).await?)
    }
}
