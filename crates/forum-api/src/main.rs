//! Forum vote API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p forum-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use forum_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {e}");
            }
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = forum_api::run(config).await {
        error!(code = e.error_code(), error = %e, "Server failed");
        std::process::exit(1);
    }
}
