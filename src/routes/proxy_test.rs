use super::*;
use crate::state::test_helpers::test_app_state;
use axum::Router;
use axum::routing::{get, post};

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/n8n/trigger",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(serde_json::json!({
                    "execution_id": format!("exec-{}", body["workflow_id"].as_str().unwrap_or("")),
                    "status": "running",
                }))
            }),
        )
        .route(
            "/api/n8n/status/{id}",
            get(|Path(id): Path<String>| async move {
                if id == "missing" {
                    (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "Execution not found" })))
                } else {
                    (StatusCode::OK, Json(serde_json::json!({ "execution_id": id, "status": "completed", "result": 1 })))
                }
            }),
        )
        .route(
            "/api/vision/analyze",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(serde_json::json!({
                    "ai_response": format!("you said {}", body["user_message"].as_str().unwrap_or("")),
                }))
            }),
        )
}

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_appends_segments_to_base() {
    let url = upstream_url("http://backend:8000", &["api", "n8n", "status", "abc"]).unwrap();
    assert_eq!(url.as_str(), "http://backend:8000/api/n8n/status/abc");
}

#[test]
fn upstream_url_keeps_base_path_prefix() {
    let url = upstream_url("http://backend:8000/jarvis", &["api", "vision", "analyze"]).unwrap();
    assert_eq!(url.as_str(), "http://backend:8000/jarvis/api/vision/analyze");
}

#[test]
fn upstream_url_encodes_reserved_characters_in_segments() {
    let url = upstream_url("http://backend:8000", &["api", "n8n", "status", "a?b/c#d%e"]).unwrap();
    assert_eq!(url.path(), "/api/n8n/status/a%3Fb%2Fc%23d%25e");
    assert_eq!(url.query(), None);
    assert_eq!(url.fragment(), None);
}

// =============================================================================
// ProxyError
// =============================================================================

#[tokio::test]
async fn proxy_error_renders_bad_gateway_with_error_body() {
    let resp = ProxyError::NotConfigured.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "backend API is not configured");
}

#[tokio::test]
async fn unconfigured_backend_is_not_configured_error() {
    let state = test_app_state(None);
    let result = status(State(state), Path("abc".into())).await;
    assert!(matches!(result, Err(ProxyError::NotConfigured)));
}

#[tokio::test]
async fn unreachable_backend_is_upstream_error() {
    // Bind then drop to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = test_app_state(Some(&format!("http://{addr}")));
    let result = status(State(state), Path("abc".into())).await;
    assert!(matches!(result, Err(ProxyError::Upstream(_))));
}

// =============================================================================
// passthrough
// =============================================================================

#[tokio::test]
async fn trigger_forwards_body_and_returns_upstream_json() {
    let base = spawn_upstream(fake_backend()).await;
    let state = test_app_state(Some(&base));

    let resp = trigger(State(state), Json(serde_json::json!({ "workflow_id": "daily-briefing", "data": {} })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["execution_id"], "exec-daily-briefing");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn status_passes_upstream_error_status_through() {
    let base = spawn_upstream(fake_backend()).await;
    let state = test_app_state(Some(&base));

    let resp = status(State(state), Path("missing".into())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Execution not found");
}

#[tokio::test]
async fn status_returns_upstream_result() {
    let base = spawn_upstream(fake_backend()).await;
    let state = test_app_state(Some(&base));

    let resp = status(State(state), Path("abc".into())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["execution_id"], "abc");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["result"], 1);
}

#[tokio::test]
async fn analyze_forwards_message() {
    let base = spawn_upstream(fake_backend()).await;
    let state = test_app_state(Some(&base));

    let resp = analyze(State(state), Json(serde_json::json!({ "image_data": null, "user_message": "hi" })))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["ai_response"], "you said hi");
}

#[tokio::test]
async fn status_forwards_reserved_characters_in_execution_id() {
    let base = spawn_upstream(fake_backend()).await;
    let state = test_app_state(Some(&base));

    for id in ["a?b", "a/b", "a#b", "50%"] {
        let resp = status(State(state.clone()), Path(id.to_owned())).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["execution_id"], id);
    }
}
