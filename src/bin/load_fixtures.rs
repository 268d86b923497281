//! Seeds the configured database with the fixture books.
//!
//! Run once per environment: `cargo run --bin load_fixtures`.

use anyhow::Context;
use bookshelf::{config, db, fixtures, store::BookStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app_cfg = config::load()?;
    let pool = db::connect(&app_cfg.database)
        .await
        .with_context(|| format!("failed to open database {}", app_cfg.database.url))?;

    let store = BookStore::new(pool.clone());
    let loaded = fixtures::load(&store).await.context("failed to load fixture books")?;
    tracing::info!(count = loaded.len(), total = store.count().await?, "fixtures loaded");

    pool.close().await;
    Ok(())
}
