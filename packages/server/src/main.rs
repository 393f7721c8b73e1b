use std::sync::Arc;

use anyhow::Context;
use tracing::{Level, info};
use wardrobe_common::storage::filesystem::FilesystemBlobStore;

use wardrobe_server::ai::OpenAiClient;
use wardrobe_server::config::AppConfig;
use wardrobe_server::database::init_db;
use wardrobe_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let blob_store = FilesystemBlobStore::new(
        config.storage.base_path.clone(),
        config.storage.public_base_url.clone(),
        config.storage.max_blob_size,
    )
    .await
    .context("Failed to initialize blob storage")?;
    info!(path = %config.storage.base_path.display(), "Blob storage ready");

    let db = init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    info!("Database ready");

    let ai = OpenAiClient::new(config.ai.clone()).context("Failed to build AI client")?;
    if config.ai.api_key.is_empty() {
        tracing::warn!("No AI API key configured; requests are sent without authorization");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        db,
        config,
        blob_store: Arc::new(blob_store),
        ai: Arc::new(ai),
    };

    let app = wardrobe_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
