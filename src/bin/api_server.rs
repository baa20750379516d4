// src/bin/api_server.rs

use bic_directory::infra::database;
use bic_directory::transport;
use bic_directory::{BankService, BankValidator, Config, CountryRegistry, PostgresBankStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // --- Storage Initialization ---
    tracing::info!("connecting to PostgreSQL");
    let pool = database::connect(&config).await?;
    database::init_schema(&pool).await?;

    // --- Service Initialization ---
    let registry = CountryRegistry::iso3166();
    tracing::info!(countries = registry.len(), "country registry loaded");
    let bank_service = BankService::new(
        Arc::new(PostgresBankStore::new(pool)),
        BankValidator::new(registry),
    );
    let app_state = transport::http::AppState { bank_service };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let openapi = transport::http::ApiDoc::openapi();
    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi);
    let app = transport::http::create_router(app_state)
        .merge(swagger)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);

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
    tracing::info!("shutdown signal received, draining connections");
}
