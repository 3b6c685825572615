//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache with optional TTL using
//! tokio synchronization primitives and an LRU eviction policy.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use pizzeria_core::cache::{pattern_matches, Cache, CacheError, Result};

/// A single cache entry with optional expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

/// In-memory cache with LRU eviction and lazy TTL expiry.
///
/// Cloning is cheap and every clone shares the same store, so one cache can
/// be handed to several repositories.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<Mutex<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` values.
    ///
    /// Returns an error if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or(CacheError::ZeroCapacity)?;
        Ok(Self {
            store: Arc::new(Mutex::new(LruCache::new(capacity))),
        })
    }

    /// Returns the number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.lock().await;

        let expired = match store.get(key) {
            Some(entry) if entry.is_expired() => true,
            Some(entry) => return Ok(Some(entry.value.clone())),
            None => return Ok(None),
        };
        if expired {
            store.pop(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.lock().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.lock().await;
        store.pop(key);
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let mut store = self.store.lock().await;
        let matching: Vec<String> = store
            .iter()
            .filter(|(key, _)| pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in matching {
            store.pop(&key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_core::cache::{product_items_pattern, QueryKey};

    const TEST_MAX_ENTRIES: usize = 1000;

    fn cache() -> MemoryCache {
        MemoryCache::new(TEST_MAX_ENTRIES).unwrap()
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = cache();
        cache.set("product:1", b"margherita", None).await.unwrap();

        let result = cache.get("product:1").await.unwrap();
        assert_eq!(result, Some(b"margherita".to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = cache();
        assert_eq!(cache.get("product:404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = cache();
        cache.set("product", b"[]", None).await.unwrap();

        cache.delete("product").await.unwrap();
        assert!(cache.get("product").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let cache = cache();
        assert!(cache.delete("product:9").await.is_ok());
    }

    #[tokio::test]
    async fn test_ttl_expiration() {
        let cache = cache();
        cache
            .set("product", b"[]", Some(Duration::from_millis(50)))
            .await
            .unwrap();
        assert!(cache.get("product").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get("product").await.unwrap().is_none());
        // Expired entries are dropped on access.
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_no_ttl_never_expires() {
        let cache = cache();
        cache.set("product", b"[]", None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(cache.get("product").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_pattern_spares_list_key() {
        let cache = cache();
        let list = QueryKey::ProductList.to_string();
        let one = QueryKey::Product(1).to_string();
        let two = QueryKey::Product(2).to_string();

        cache.set(&list, b"[]", None).await.unwrap();
        cache.set(&one, b"1", None).await.unwrap();
        cache.set(&two, b"2", None).await.unwrap();
        cache.set("order:1", b"o", None).await.unwrap();

        cache
            .delete_pattern(&product_items_pattern())
            .await
            .unwrap();

        assert!(cache.get(&one).await.unwrap().is_none());
        assert!(cache.get(&two).await.unwrap().is_none());
        assert!(cache.get(&list).await.unwrap().is_some());
        assert!(cache.get("order:1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_overwrite_value() {
        let cache = cache();
        cache.set("product:1", b"first", None).await.unwrap();
        cache.set("product:1", b"second", None).await.unwrap();

        assert_eq!(
            cache.get("product:1").await.unwrap(),
            Some(b"second".to_vec())
        );
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = MemoryCache::new(3).unwrap();

        cache.set("product:1", b"1", None).await.unwrap();
        cache.set("product:2", b"2", None).await.unwrap();
        cache.set("product:3", b"3", None).await.unwrap();

        // Touch product:1 so product:2 becomes least recently used.
        cache.get("product:1").await.unwrap();

        cache.set("product:4", b"4", None).await.unwrap();

        assert!(cache.get("product:1").await.unwrap().is_some());
        assert!(cache.get("product:2").await.unwrap().is_none());
        assert!(cache.get("product:3").await.unwrap().is_some());
        assert!(cache.get("product:4").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = cache();
        let other = cache.clone();

        cache.set("product", b"[]", None).await.unwrap();
        assert!(other.get("product").await.unwrap().is_some());
    }

    #[test]
    fn test_zero_max_entries_is_rejected() {
        assert_eq!(MemoryCache::new(0).unwrap_err(), CacheError::ZeroCapacity);
    }
}
