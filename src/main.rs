use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use reelmatch_api::api::{create_router, AppState};
use reelmatch_api::catalog::Catalog;
use reelmatch_api::config::Config;
use reelmatch_api::services::TmdbClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A missing or inconsistent catalog artifact aborts here, before the
    // listener is bound.
    let catalog = Catalog::load(&config.movies_path, &config.similarity_path)?;
    tracing::info!(movies = catalog.len(), "Catalog loaded");

    let metadata = TmdbClient::new(
        config.tmdb_api_url.clone(),
        config.tmdb_api_key.clone(),
        config.image_base_url.clone(),
    );

    let state = AppState::new(Arc::new(catalog), Arc::new(metadata));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
