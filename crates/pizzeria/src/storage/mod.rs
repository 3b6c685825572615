//! Storage implementations built on the traits in `pizzeria_core::storage`.
//!
//! - [`cached`]: the query-caching [`ProductRepository`]
//! - [`inmemory`]: an in-process [`pizzeria_core::storage::ProductStore`] for
//!   tests and local development

pub mod cached;
pub mod inmemory;

pub use cached::ProductRepository;
pub use inmemory::InMemoryProductStore;
