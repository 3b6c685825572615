//! pizzeria - Cached product repository for the pizzeria storefront.
//!
//! Combines a [`pizzeria_core::storage::ProductStore`] with a
//! [`pizzeria_core::cache::Cache`] into a [`ProductRepository`] whose reads
//! are cached per query and whose writes invalidate the affected queries.

pub mod cache;
pub mod config;
pub mod storage;

pub use cache::MemoryCache;
pub use config::Config;
pub use storage::{InMemoryProductStore, ProductRepository};
