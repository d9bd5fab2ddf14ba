//! Dev Agent server.
//!
//! Serves the chat API and the static page assets.

use std::env;

use api::{app, ApiConfig, AppState};
use orchestrator::{AgentVariant, Orchestrator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ApiConfig::from_env()?;

    let orchestrator = Orchestrator::from_env()?;
    log_credentials(orchestrator.config().variant);

    let state = AppState::new(orchestrator);
    let app = app(state, &config.public_dir);

    info!(
        addr = %config.addr,
        public_dir = %config.public_dir.display(),
        "Dev AI Agent listening"
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Log which credentials are present. Values are never logged.
fn log_credentials(variant: AgentVariant) {
    let keys: &[&str] = match variant {
        AgentVariant::OpenRouter => &["OPENROUTER_KEY", "SERPAPI_KEY"],
        AgentVariant::Gemini => &["GEMINI_API_KEY"],
    };

    for key in keys {
        if key_present(key) {
            info!("{} loaded", key);
        } else {
            warn!("{} is not set", key);
        }
    }
}

fn key_present(name: &str) -> bool {
    env::var(name).map(|v| !v.trim().is_empty()).unwrap_or(false)
}
