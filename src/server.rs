/// Server setup and initialization
/// 
/// Wires together the database pool, the project store and the HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::{create_project_routes, AppState},
    config::Config,
    project::{database, ProjectStore, SqliteProjectStore},
};
use anyhow::Result;
use axum::{http::StatusCode, routing::get, Router};
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

/// Build the router for any project store
///
/// Requests exceeding `request_timeout` are answered with 408 and their handler future
/// is dropped, which cancels the in-flight storage call.
pub fn build_router(store: Arc<dyn ProjectStore>, request_timeout: Duration) -> Router {
    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        
        // Project CRUD routes
        .merge(create_project_routes().with_state(AppState { store }))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// Create the main Axum application with all routes and middleware
/// 
/// Opens the database pool, bootstraps the schema and hands a SQLite-backed store to the routes.
pub async fn create_app(config: &Config) -> Result<Router> {
    tracing::info!("🏗️ Initializing project store");
    let pool = database::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize project database: {:#}", e))?;
    let store: Arc<dyn ProjectStore> = Arc::new(SqliteProjectStore::new(pool));

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = build_router(store, Duration::from_secs(config.server.request_timeout_secs));

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
/// 
/// Creates the application and serves it on the configured address until Ctrl-C.
pub async fn start_server(config: Config) -> Result<()> {
    init_logging(&config.logging.level);

    tracing::info!("Starting projectd server...");
    
    // Create the application
    let app = create_app(&config).await?;

    // Bind to the configured address
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;
    
    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

/// Initialize tracing; RUST_LOG takes precedence over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
