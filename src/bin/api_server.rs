// src/bin/api_server.rs

use product_catalog_api::infra::{config::AppConfig, logging};
use product_catalog_api::transport;
use product_catalog_api::{Argon2Verifier, DatabaseService};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    // --- Configuration ---
    let config = AppConfig::from_env()?;
    tracing::info!(?config, "configuration loaded");

    // --- Service Initialization ---
    // Connections are opened per request; startup does not require the database to be up.
    let db_service = DatabaseService::connect_lazy(&config)?;
    let app_state = transport::http::AppState::new(Arc::new(db_service), Arc::new(Argon2Verifier));

    // --- API Server Initialization ---
    if config.cors_allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS is empty; browsers on other origins will be refused");
    }
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(transport::http::cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
