//! Scoreboard Service - HTTP API for score submissions
//!
//! This is the main entry point for the scoreboard service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoreboard_service::{create_router, AppState, ServiceConfig};
use scoreboard_store::MongoStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scoreboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scoreboard Service");

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load .env file"),
    }

    // Load configuration from environment
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, exiting");
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        database = ?config.mongodb_database,
        cors_origins = ?config.cors_origins,
        max_body_bytes = config.max_body_bytes,
        "Service configuration loaded"
    );

    // The listener comes up regardless of whether the database does.
    let store = Arc::new(MongoStore::new(
        config.mongodb_uri.clone(),
        config.mongodb_database.clone(),
    ));
    tokio::spawn(connect_store(Arc::clone(&store)));

    let state = AppState::new(store, config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let port = listener.local_addr()?.port();
    tracing::info!(port, "Server running on port {port}");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn connect_store(store: Arc<MongoStore>) {
    match store.connect().await {
        Ok(()) => tracing::info!("MongoDB connected"),
        Err(e) => tracing::error!(error = %e, "MongoDB connection failed"),
    }
}
