//! Cache backend implementations.
//!
//! Concrete implementations of the [`pizzeria_core::cache::Cache`] trait.
//! The repository only sees the trait, so any backend can be injected.

pub mod memory;

pub use memory::MemoryCache;
