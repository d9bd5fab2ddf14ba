//! Chat turn endpoint.

use axum::extract::State;
use axum::Json;
use orchestrator::Message;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct AgentResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub result: String,
    pub history: Vec<Message>,
}

/// Run one chat turn.
///
/// A body that is missing, malformed, or has no `message` is answered
/// with 400 before anything is recorded. The turn runs detached, so a
/// client that disconnects mid-turn still leaves a complete exchange in
/// the transcript.
pub async fn agent_api(
    State(state): State<AppState>,
    body: Option<Json<AgentRequest>>,
) -> Result<Json<AgentResponse>> {
    let message = body
        .and_then(|Json(req)| req.message)
        .ok_or(ApiError::MissingMessage)?;
    debug!(chars = message.chars().count(), "/api/agent request");

    let outcome = state.orchestrator.clone().spawn_turn(message).await?;

    Ok(Json(AgentResponse {
        kind: "agent",
        result: outcome.reply,
        history: outcome.history,
    }))
}
