//! pizzeria_core - Core types and pure functions for the pizzeria product data layer.
//!
//! Nothing in this crate performs I/O. The traits in [`cache`] and [`storage`]
//! are the seams that concrete backends plug into.

pub mod cache;
pub mod product;
pub mod storage;
