//! Library API server
//!
//! Serves the `/books` REST API and its documentation.

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use library_api::{
    api,
    config::AppConfig,
    repository::{seed, Repository},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_api={},tower_http=debug", config.logging.level).into());

    let (json_layer, pretty_layer) = match config.logging.format.as_str() {
        "json" => (Some(fmt::layer().json()), None),
        _ => (None, Some(fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!("Starting Library API v{}", env!("CARGO_PKG_VERSION"));

    let books = seed::load_seed_books(config.books.seed_file.as_deref().map(Path::new))?;
    tracing::info!(
        count = books.len(),
        id_strategy = ?config.books.id_strategy,
        "Book store initialized"
    );

    let addr = config.listen_addr();
    let repository = Repository::in_memory(books, config.books.id_strategy);
    let app = api::create_router(AppState::new(config, repository));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("API documentation at http://{}/api", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
