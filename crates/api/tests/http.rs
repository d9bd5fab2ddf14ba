//! End-to-end tests for the HTTP boundary, driven through the router.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use api::{app, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_brain::{
    BrainError, DelayedModel, RecordingSearch, ScriptedModel, ScriptedSessionModel, ToolInvocation,
};
use orchestrator::{Orchestrator, OrchestratorConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/public")
}

fn stateless_app(model: Arc<ScriptedModel>, search: Arc<RecordingSearch>) -> Router {
    let config = OrchestratorConfig::builder().system_prompt("SYS").build();
    let orchestrator = Orchestrator::new(model, search, config);
    app(AppState::new(orchestrator), public_dir())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let app = stateless_app(
        Arc::new(ScriptedModel::new()),
        Arc::new(RecordingSearch::new()),
    );

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_agent_turn_returns_reply_and_history() {
    let model = Arc::new(ScriptedModel::with_replies(["Hello there!"]));
    let app = stateless_app(model.clone(), Arc::new(RecordingSearch::new()));

    let (status, body) = send(&app, post_json("/api/agent", json!({ "message": "hi" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "agent");
    assert_eq!(body["result"], "Hello there!");

    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["id"], 1);
    assert_eq!(history[0]["sender"], "user");
    assert_eq!(history[0]["text"], "hi");
    assert_eq!(history[1]["id"], 2);
    assert_eq!(history[1]["sender"], "agent");
    assert!(history[1]["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_calc_does_not_call_model() {
    let model = Arc::new(ScriptedModel::new());
    let search = Arc::new(RecordingSearch::new());
    let app = stateless_app(model.clone(), search.clone());

    let (status, body) = send(
        &app,
        post_json("/api/agent", json!({ "message": "calc: 5*2+10" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "The result of 5*2+10 is **20**.");
    assert_eq!(model.call_count(), 0);
    assert!(search.queries().is_empty());
}

#[tokio::test]
async fn test_web_prefix_searches() {
    let model = Arc::new(ScriptedModel::with_replies(["Rust 1.x is out."]));
    let search = Arc::new(RecordingSearch::with_response("Top web results for \"rust\":"));
    let app = stateless_app(model.clone(), search.clone());

    let (status, body) = send(
        &app,
        post_json("/api/agent", json!({ "message": "web: latest rust release" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Rust 1.x is out.");
    assert_eq!(search.queries(), vec!["latest rust release".to_string()]);
}

#[tokio::test]
async fn test_missing_message_is_rejected() {
    let model = Arc::new(ScriptedModel::new());
    let app = stateless_app(model.clone(), Arc::new(RecordingSearch::new()));
    let expected = json!({ "error": "No message provided from frontend" });

    for payload in [json!({}), json!({ "message": null }), json!({ "message": "" })] {
        let (status, body) = send(&app, post_json("/api/agent", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, expected);
    }

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/api/agent")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    let (_, body) = send(&app, get("/api/history")).await;
    assert_eq!(body, json!({ "history": [] }));
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_model_failure_returns_500_with_history() {
    let model = Arc::new(ScriptedModel::new());
    model.push_error(BrainError::Provider {
        status: 402,
        message: "Insufficient credits".to_string(),
    });
    let app = stateless_app(model, Arc::new(RecordingSearch::new()));

    let (status, body) = send(&app, post_json("/api/agent", json!({ "message": "hi" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Insufficient credits");

    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["text"], "hi");
    assert_eq!(history[1]["sender"], "agent");
    assert_eq!(history[1]["text"], "⚠️ Insufficient credits");
}

#[tokio::test]
async fn test_history_and_reset() {
    let model = Arc::new(ScriptedModel::with_replies(["one", "two"]));
    let app = stateless_app(model, Arc::new(RecordingSearch::new()));

    send(&app, post_json("/api/agent", json!({ "message": "first" }))).await;
    send(&app, post_json("/api/agent", json!({ "message": "second" }))).await;

    let (status, body) = send(&app, get("/api/history")).await;
    assert_eq!(status, StatusCode::OK);
    let history = body["history"].as_array().unwrap();
    let texts: Vec<&str> = history.iter().map(|m| m["text"].as_str().unwrap()).collect();
    assert_eq!(texts, ["first", "one", "second", "two"]);

    let (status, body) = send(&app, post_json("/api/reset", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "message": "Session reset." }));

    let (_, body) = send(&app, get("/api/history")).await;
    assert_eq!(body, json!({ "history": [] }));

    let (_, body) = send(&app, post_json("/api/agent", json!({ "message": "again" }))).await;
    assert_eq!(body["history"][0]["id"], 1);
}

#[tokio::test]
async fn test_disconnected_client_still_gets_reply_recorded() {
    let model = Arc::new(DelayedModel::with_millis(ScriptedModel::new(), 200));
    let orchestrator = Orchestrator::new(
        model,
        Arc::new(RecordingSearch::new()),
        OrchestratorConfig::default(),
    );
    let app = app(AppState::new(orchestrator), public_dir());

    let dropped = tokio::time::timeout(
        Duration::from_millis(20),
        app.clone()
            .oneshot(post_json("/api/agent", json!({ "message": "first" }))),
    )
    .await;
    assert!(dropped.is_err());

    let (status, body) = send(&app, post_json("/api/agent", json!({ "message": "second" }))).await;
    assert_eq!(status, StatusCode::OK);

    let history = body["history"].as_array().unwrap();
    let texts: Vec<(&str, &str)> = history
        .iter()
        .map(|m| (m["sender"].as_str().unwrap(), m["text"].as_str().unwrap()))
        .collect();
    assert_eq!(
        texts,
        [
            ("user", "first"),
            ("agent", "first"),
            ("user", "second"),
            ("agent", "second"),
        ]
    );
}

#[tokio::test]
async fn test_tool_calling_variant() {
    let model = Arc::new(ScriptedSessionModel::new());
    model.push_tool_call(ToolInvocation::Calculate {
        expr: "2^10".to_string(),
    });
    let orchestrator = Orchestrator::with_sessions(model.clone(), OrchestratorConfig::default());
    let app = app(AppState::new(orchestrator), public_dir());

    let (status, body) = send(
        &app,
        post_json("/api/agent", json!({ "message": "what is two to the tenth?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "The result of 2^10 is **1024**.");
    assert_eq!(body["history"].as_array().unwrap().len(), 2);
    assert_eq!(model.sessions_opened(), 1);

    let (_, body) = send(&app, get("/api/history")).await;
    assert_eq!(body["history"][0]["text"], "what is two to the tenth?");
}

#[tokio::test]
async fn test_static_assets_and_cors() {
    let app = stateless_app(
        Arc::new(ScriptedModel::new()),
        Arc::new(RecordingSearch::new()),
    );

    let (status, body) = send(&app, get("/manifest.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["short_name"], "DevAgent");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let response = app.oneshot(get("/missing.png")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
