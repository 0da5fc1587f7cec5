//! `kelontong` command-line entry point.
//!
//! ```text
//! kelontong list              fetch the catalog (API, then fallback file)
//! kelontong show <id>         fetch one product
//! kelontong create <file>     create a product from a JSON file
//! kelontong categories        print the configured categories
//! ```

use anyhow::{Context, bail};
use kelontong_observability::LogFormat;
use kelontong_products::ProductCreateInput;
use kelontong_storefront::{ProductStore, StoreConfig};

const USAGE: &str = "usage: kelontong <list | show <id> | create <file> | categories>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let format = std::env::var("KELONTONG_LOG_FORMAT")
        .ok()
        .and_then(|v| LogFormat::parse(&v))
        .unwrap_or_default();
    kelontong_observability::init_with(format);

    let config = StoreConfig::from_env().context("invalid storefront configuration")?;
    tracing::info!(api = %config.api_base_url, fallback = %config.fallback, "storefront configured");
    let store = ProductStore::new(config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["list"] => {
            store.fetch_products().await;
            if let Some(err) = store.error() {
                bail!("{err}");
            }
            match store.origin() {
                Some(origin) if origin.is_fallback() => {
                    tracing::warn!(?origin, "API unavailable; listing the local fallback catalog")
                }
                Some(origin) => tracing::info!(?origin, "catalog source"),
                None => {}
            }
            print_json(&store.products())?;
        }
        ["show", id] => {
            let product = store
                .fetch_product(id)
                .await
                .with_context(|| format!("failed to fetch product {id}"))?;
            print_json(&product)?;
        }
        ["create", path] => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {path}"))?;
            let input: ProductCreateInput =
                serde_json::from_str(&raw).with_context(|| format!("{path} is not a product"))?;
            let product = store
                .create_product(input)
                .await
                .context("failed to create product")?;
            if let Some(message) = store.success_message() {
                tracing::info!("{message}");
            }
            print_json(&product)?;
        }
        ["categories"] => {
            for category in store.categories().iter() {
                println!("{}\t{}", category.id(), category.name());
            }
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
