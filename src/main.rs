use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use netadmin_profile::assets::AssetStore;
use netadmin_profile::config::Config;
use netadmin_profile::content::ProfileCatalog;
use netadmin_profile::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("netadmin_profile=info".parse()?),
        )
        .init();

    info!("Starting profile site");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Startup-fatal steps, in order: assets first, then content validation.
    // Both must succeed before any render is possible.
    let assets = AssetStore::load(&config.assets_dir)
        .context("failed to load page assets")?;

    let catalog = ProfileCatalog::load()
        .context("content schema validation failed")?;
    info!("Content catalog validated across all locales");

    let state = AppState {
        catalog,
        assets: Arc::new(assets),
    };
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
