//! pizzeria-client CLI entry point.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use pizzeria::{Config, MemoryCache, ProductRepository};
use pizzeria_client::cli::products::{new_product, product_update, ProductsAction};
use pizzeria_client::cli::{Cli, Commands};
use pizzeria_client::output::{render_product, render_products};
use pizzeria_client::RestProductStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pizzeria=info,pizzeria_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let store = RestProductStore::new(&cli.store_url, cli.api_key.as_str())?;
    tracing::debug!(endpoint = %store.endpoint(), "Using product store");

    let store = Arc::new(store);
    let cache = Arc::new(MemoryCache::new(config.cache_max_entries)?);
    let repo = ProductRepository::new(store, cache, config.cache_ttl());

    match cli.command {
        Commands::Products(products_cmd) => match products_cmd.action {
            ProductsAction::List => {
                let products = repo.list().await?;
                println!("{}", render_products(&products, cli.format)?);
            }
            ProductsAction::Get { id } => {
                let product = repo.get(id).await?;
                println!("{}", render_product(&product, cli.format)?);
            }
            ProductsAction::Create { name, price, image } => {
                let input = new_product(&name, &price, image)?;
                let product = repo.create(&input).await?;
                if !cli.quiet {
                    tracing::info!(product_id = product.id, "Created product");
                }
                println!("{}", render_product(&product, cli.format)?);
            }
            ProductsAction::Update {
                id,
                name,
                price,
                image,
                clear_image,
            } => {
                let update = product_update(id, name, price.as_deref(), image, clear_image)?;
                let product = repo.update(&update).await?;
                if !cli.quiet {
                    tracing::info!(product_id = product.id, "Updated product");
                }
                println!("{}", render_product(&product, cli.format)?);
            }
            ProductsAction::Delete { id } => {
                repo.delete(id).await?;
                if !cli.quiet {
                    println!("Deleted product {}", id);
                }
            }
        },
    }

    Ok(())
}
