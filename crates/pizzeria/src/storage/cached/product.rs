//! Cached product repository.
//!
//! Wraps a [`ProductStore`] with a query cache:
//! - **Reads**: Check cache first, on miss fetch from the store and populate cache
//! - **Writes**: Persist to the store, then invalidate the affected keys
//!
//! | Operation | Invalidates |
//! |-----------|-------------|
//! | `create`  | `product` |
//! | `update`  | `product`, `product:{id}` |
//! | `delete`  | `product`, `product:{id}` |

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use pizzeria_core::cache::{decode, encode, Cache, QueryKey};
use pizzeria_core::product::{
    validate_new_product, validate_product_id, validate_product_update, NewProduct, Product,
    ProductUpdate,
};
use pizzeria_core::storage::{single_row, ProductStore, Result};

use super::key_locks::KeyLocks;

/// Product data access with a query cache and automatic invalidation.
///
/// The cache is injected, so its lifetime and contents are owned by the
/// caller. Cache failures never fail an operation: they are logged and the
/// repository falls back to the store.
///
/// # Type Parameters
///
/// * `S` - The remote store implementation
/// * `C` - The cache implementation
pub struct ProductRepository<S, C>
where
    S: ProductStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
    ttl: Option<Duration>,
    locks: KeyLocks,
}

impl<S, C> ProductRepository<S, C>
where
    S: ProductStore,
    C: Cache,
{
    /// Creates a new product repository.
    ///
    /// # Arguments
    ///
    /// * `store` - The remote store
    /// * `cache` - The cache holding query results
    /// * `ttl` - Time-to-live for cached results; `None` keeps them until invalidated
    pub fn new(store: Arc<S>, cache: Arc<C>, ttl: Option<Duration>) -> Self {
        Self {
            store,
            cache,
            ttl,
            locks: KeyLocks::default(),
        }
    }

    /// Returns every product in insertion order.
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.read(QueryKey::ProductList, || self.store.select_products())
            .await
    }

    /// Returns the product with the given ID.
    ///
    /// Fails with `NotFound` when no row matches and `MultipleRows` when
    /// more than one does.
    pub async fn get(&self, id: i64) -> Result<Product> {
        validate_product_id(id)?;
        self.read(QueryKey::Product(id), || async move {
            single_row(self.store.select_product(id).await?, id)
        })
        .await
    }

    /// Creates a product and returns it with its server-assigned ID.
    ///
    /// The new product is not cached under its own key; the next `get`
    /// fetches it.
    pub async fn create(&self, product: &NewProduct) -> Result<Product> {
        validate_new_product(product)?;
        let created = self.store.insert_product(product).await?;

        self.invalidate(QueryKey::ProductList).await;

        tracing::debug!(product_id = created.id, name = %created.name, "Product created");
        Ok(created)
    }

    /// Applies `update` and returns the updated product.
    pub async fn update(&self, update: &ProductUpdate) -> Result<Product> {
        validate_product_update(update)?;
        let rows = self.store.update_product(update).await?;

        if !rows.is_empty() {
            self.invalidate(QueryKey::ProductList).await;
            self.invalidate(QueryKey::Product(update.id)).await;
        }

        let updated = single_row(rows, update.id)?;
        tracing::debug!(product_id = updated.id, name = %updated.name, "Product updated");
        Ok(updated)
    }

    /// Deletes the product with the given ID.
    pub async fn delete(&self, id: i64) -> Result<()> {
        validate_product_id(id)?;
        self.store.delete_product(id).await?;

        self.invalidate(QueryKey::ProductList).await;
        self.invalidate(QueryKey::Product(id)).await;

        tracing::debug!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Marks `key` stale so the next read refetches it.
    ///
    /// Waits for an in-flight fetch of the same key to finish first.
    pub async fn invalidate(&self, key: QueryKey) {
        let key = key.to_string();
        let _permit = self.locks.acquire(&key).await;

        if let Err(err) = self.cache.delete(&key).await {
            tracing::warn!(key = %key, error = %err, "Failed to invalidate cache key");
        }
    }

    /// Marks every cached key matching a glob `pattern` stale.
    pub async fn invalidate_matching(&self, pattern: &str) {
        let keys = self.locks.active_matching(pattern);
        let mut permits = Vec::with_capacity(keys.len());
        for key in &keys {
            permits.push(self.locks.acquire(key).await);
        }

        if let Err(err) = self.cache.delete_pattern(pattern).await {
            tracing::warn!(pattern = %pattern, error = %err, "Failed to invalidate cache pattern");
        }
    }

    async fn read<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let key = key.to_string();
        if let Some(value) = self.lookup(&key).await {
            return Ok(value);
        }

        let _permit = self.locks.acquire(&key).await;
        self.fetch_and_populate(&key, fetch).await
    }

    async fn fetch_and_populate<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        // Another reader may have populated the slot while we waited.
        if let Some(value) = self.lookup(key).await {
            return Ok(value);
        }

        tracing::trace!(key = %key, "Cache miss");
        let value = fetch().await?;

        match encode(&value) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(key, &bytes, self.ttl).await {
                    tracing::warn!(key = %key, error = %err, "Failed to populate cache");
                }
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to serialize cache value");
            }
        }

        Ok(value)
    }

    async fn lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.cache.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Cache read failed");
                return None;
            }
        };

        match decode(&bytes) {
            Ok(value) => {
                tracing::trace!(key = %key, "Cache hit");
                Some(value)
            }
            Err(err) => {
                // Treat as a miss; the next fetch overwrites the entry.
                tracing::warn!(key = %key, error = %err, "Cache deserialization failed");
                None
            }
        }
    }
}
