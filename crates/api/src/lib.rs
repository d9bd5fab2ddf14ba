//! HTTP boundary for the Dev Agent.
//!
//! Exposes the chat turn, transcript and reset endpoints over one shared
//! [`orchestrator::Orchestrator`], plus static assets from a public
//! directory.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `POST` | `/api/agent` | `{ type: "agent", result, history }`, or 400/500 `{ error, history? }` |
//! | `GET` | `/api/history` | `{ history }` |
//! | `POST` | `/api/reset` | `{ status: "ok", message: "Session reset." }` |
//! | `GET` | `/health` | `{ status: "ok" }` |

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use state::AppState;

/// Build the full application: API routes, static fallback and CORS.
pub fn app(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    routes::router()
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
