//! Server setup and initialization
//!
//! Builds the application state for either backend and runs the server.

use std::sync::Arc;

use axum::Router;
use reply_common::{AppConfig, AppError, JwtService};
use reply_core::SnowflakeGenerator;
use reply_db::{apply_schema, create_pool, DatabaseConfig, InMemoryStore};
use reply_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the rate limit configuration is unusable
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

fn base_context(config: &AppConfig) -> ServiceContextBuilder {
    ServiceContextBuilder::new()
        .jwt_service(Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry,
        )))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)))
        .reply_config(config.replies.clone())
}

/// Connect to PostgreSQL, apply the schema, and create AppState
///
/// # Errors
/// Returns an error if the database is unreachable or the schema fails
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from_settings(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    apply_schema(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to apply schema: {e}")))?;
    info!("Database schema applied");

    let service_context = base_context(&config)
        .postgres(pool)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Create AppState over an in-memory store
///
/// # Errors
/// Returns `AppError::Config` if the service context cannot be built
pub fn create_in_memory_state(config: AppConfig, store: InMemoryStore) -> Result<AppState, AppError> {
    let service_context = base_context(&config)
        .in_memory(store)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener
///
/// # Errors
/// Returns an error if the server stops unexpectedly
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to read local address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if startup or serving fails
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
