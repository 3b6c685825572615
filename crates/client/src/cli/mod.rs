//! CLI command definitions.

pub mod products;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the pizzeria product catalogue.
#[derive(Debug, Parser)]
#[command(name = "pizzeria-client")]
#[command(about = "CLI client for the pizzeria product catalogue", long_about = None)]
pub struct Cli {
    /// Remote store base URL.
    #[arg(long, env = "PIZZERIA_STORE_URL")]
    pub store_url: String,

    /// Remote store API key.
    #[arg(long, env = "PIZZERIA_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Menu item management.
    Products(products::ProductsCommand),
}
