//! Reply API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p reply-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use reply_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so logging can follow the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing_with_config(&TracingConfig::for_environment(
                Environment::Development,
            ));
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        decrement_on_delete = config.replies.decrement_on_delete,
        tombstones = ?config.replies.tombstone_visibility,
        "Configuration loaded"
    );

    if let Err(e) = reply_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
