//! In-memory product store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pizzeria_core::product::{NewProduct, Product, ProductUpdate};
use pizzeria_core::storage::{ProductStore, Result};

#[derive(Debug, Default)]
struct State {
    /// Keyed by ID, so iteration order is insertion order.
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// In-memory stand-in for the remote `products` collection.
///
/// Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `products`. New IDs continue after the
    /// highest seeded ID.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<i64, Product> = products.into_iter().map(|p| (p.id, p)).collect();
        let last_id = products.keys().next_back().copied().unwrap_or(0);
        Self {
            state: Arc::new(RwLock::new(State { products, last_id })),
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn select_products(&self) -> Result<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.products.values().cloned().collect())
    }

    async fn select_product(&self, id: i64) -> Result<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.products.get(&id).cloned().into_iter().collect())
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<Product> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let created = product.clone().into_product(state.last_id);
        state.products.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_product(&self, update: &ProductUpdate) -> Result<Vec<Product>> {
        let mut state = self.state.write().await;
        Ok(match state.products.get_mut(&update.id) {
            Some(product) => {
                update.apply_to(product);
                vec![product.clone()]
            }
            None => Vec::new(),
        })
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        let mut state = self.state.write().await;
        state.products.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_core::product::Price;

    fn price(amount: f64) -> Price {
        Price::new(amount).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryProductStore::new();

        let first = store
            .insert_product(&NewProduct::new("Margherita", price(9.99)))
            .await
            .unwrap();
        let second = store
            .insert_product(&NewProduct::new("Pepperoni", price(11.99)))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_select_products_in_insertion_order() {
        let store = InMemoryProductStore::new();
        for name in ["Margherita", "Pepperoni", "Hawaiian"] {
            store
                .insert_product(&NewProduct::new(name, price(10.0)))
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .select_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Margherita", "Pepperoni", "Hawaiian"]);
    }

    #[tokio::test]
    async fn test_select_missing_product_is_empty() {
        let store = InMemoryProductStore::new();
        assert!(store.select_product(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_product_matches_nothing() {
        let store = InMemoryProductStore::new();
        let rows = store
            .update_product(&ProductUpdate::new(5).with_name("Diavola"))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let store =
            InMemoryProductStore::with_products([Product::new(1, "Margherita", price(9.99))]);

        let rows = store
            .update_product(&ProductUpdate::new(1).with_image("m.png"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].image.as_deref(), Some("m.png"));
        assert_eq!(rows[0].name, "Margherita");
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_ok() {
        let store = InMemoryProductStore::new();
        assert!(store.delete_product(42).await.is_ok());
    }

    #[tokio::test]
    async fn test_seeded_store_continues_ids() {
        let store = InMemoryProductStore::with_products([
            Product::new(3, "Margherita", price(9.99)),
            Product::new(7, "Pepperoni", price(11.99)),
        ]);

        let created = store
            .insert_product(&NewProduct::new("Hawaiian", price(12.0)))
            .await
            .unwrap();
        assert_eq!(created.id, 8);
    }
}
