//! Route definitions
//!
//! Reply routes are mounted under /api/v1; health routes sit at the root.

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::{health, replies};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(reply_routes())
}

/// Reply routes
fn reply_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/feeds/:feed_id/replies",
            get(replies::list_replies).post(replies::create_reply),
        )
        .route(
            "/replies/:reply_id",
            patch(replies::update_reply).delete(replies::delete_reply),
        )
}
