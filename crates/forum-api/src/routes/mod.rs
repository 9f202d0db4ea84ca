//! Route definitions
//!
//! Vote routes live at the root so existing forum clients keep working.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, votes};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(health_routes()).merge(vote_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Post vote routes
fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/vote", post(votes::submit_vote))
        .route("/posts/:post_id/votes", get(votes::get_votes))
        .route("/posts/:post_id/votes/:user_id", get(votes::get_user_vote))
}
