//! pizzeria_client - REST store client and CLI for the pizzeria product catalogue.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::RestProductStore;
pub use error::{ClientError, Result};
