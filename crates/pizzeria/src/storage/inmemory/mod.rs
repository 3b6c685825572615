//! In-memory storage backend for testing.
//!
//! Stores products in a `BTreeMap` behind `Arc<RwLock<_>>` and assigns
//! identifiers the way the remote store does: sequentially, starting at 1.
//! Nothing is persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use pizzeria::storage::inmemory::InMemoryProductStore;
//!
//! let store = InMemoryProductStore::new();
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryProductStore;
