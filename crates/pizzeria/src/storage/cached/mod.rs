//! Cached repository over a remote product store.
//!
//! [`ProductRepository`] implements the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from the store and populate cache
//! - **Writes**: Persist to the store, then invalidate the affected keys
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let store = Arc::new(RestProductStore::new(&store_url, &api_key)?);
//! let cache = Arc::new(MemoryCache::new(10_000)?);
//!
//! let repo = ProductRepository::new(store, cache, None);
//! let menu = repo.list().await?;
//! ```

mod key_locks;
mod product;

pub use product::ProductRepository;
