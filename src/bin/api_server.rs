// API Server Binary Entry Point
//
// Purpose: Start the Axum chat server for heat-mitigation recommendations
// Usage: cargo run --features api --bin api_server

use heat_advisor::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "heat_advisor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = ServerConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CLIENT_URL: {}", config.client_url);
    tracing::info!("  GEOCODER_URL: {}", config.geocoder_url);
    tracing::info!("  OPENAI_MODEL: {}", config.openai_model);
    tracing::info!(
        "  OPENAI_API_KEY: {}",
        if config.openai_api_key.is_some() { "set" } else { "not set" }
    );
    tracing::info!("  HTTP_TIMEOUT_SECS: {}", config.http_timeout.as_secs());

    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    // Create router with all endpoints and middleware
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
