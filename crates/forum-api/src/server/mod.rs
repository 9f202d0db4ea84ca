//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use forum_common::{AppConfig, AppError, AppResult};
use forum_db::{create_pool, run_migrations, PgReactionRepository, PoolConfig};
use forum_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), state.config());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let reaction_repo = Arc::new(PgReactionRepository::new(pool));
    let service_context = ServiceContext::new(reaction_repo)
        .with_operation_timeout(config.database.operation_timeout());

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener until a shutdown signal arrives
pub async fn serve(listener: TcpListener, app: Router) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::internal)?;

    info!("Server shut down");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
