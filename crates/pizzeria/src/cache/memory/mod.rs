//! In-memory cache backend.
//!
//! Provides a thread-safe LRU cache with optional TTL for single-process use.

mod cache;

pub use cache::MemoryCache;
