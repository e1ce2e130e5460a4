//! # reply-api
//!
//! REST API server for feed replies, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_in_memory_state, run, run_server};
pub use state::AppState;
