//! Route handlers for the chat API.

pub mod agent;
pub mod session;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(session::health))
        // API endpoints
        .route("/api/history", get(session::history_api))
        .route("/api/reset", post(session::reset_api))
        .route("/api/agent", post(agent::agent_api))
}
