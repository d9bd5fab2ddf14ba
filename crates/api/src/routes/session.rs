//! Liveness, transcript read and reset endpoints.

use axum::extract::State;
use axum::Json;
use orchestrator::Message;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub history: Vec<Message>,
}

/// Liveness probe.
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: None,
    })
}

/// Full transcript, oldest first.
pub async fn history_api(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.orchestrator.history().await,
    })
}

/// Clear the transcript and any model session.
pub async fn reset_api(State(state): State<AppState>) -> Json<StatusResponse> {
    state.orchestrator.reset().await;
    Json(StatusResponse {
        status: "ok",
        message: Some("Session reset."),
    })
}
