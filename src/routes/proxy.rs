//! Pass-through proxy for the workflow and vision backend routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. These handlers forward the three
//! backend contracts to `JARVIS_API_URL` verbatim and hand back the upstream
//! status and JSON body unchanged; no payload is inspected or rewritten.
//!
//! ERROR HANDLING
//! ==============
//! When the backend is not configured or cannot be reached the handlers answer
//! `502` with `{ "error": "..." }`, the shape the widgets already treat as an
//! application-level failure.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend API is not configured")]
    NotConfigured,

    #[error("backend request failed: {0}")]
    Upstream(String),

    #[error("backend response could not be read: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Append `segments` to the backend base URL, percent-encoding each one.
fn upstream_url(base: &str, segments: &[&str]) -> Result<reqwest::Url, ProxyError> {
    let mut url = reqwest::Url::parse(base).map_err(|e| ProxyError::Upstream(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ProxyError::Upstream(format!("backend URL cannot carry a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `POST /api/n8n/trigger`
pub async fn trigger(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ProxyError> {
    forward(&state, Method::POST, &["api", "n8n", "trigger"], Some(body)).await
}

/// `GET /api/n8n/status/{execution_id}`
///
/// The id arrives percent-decoded and is re-encoded as a single segment.
pub async fn status(State(state): State<AppState>, Path(execution_id): Path<String>) -> Result<Response, ProxyError> {
    forward(&state, Method::GET, &["api", "n8n", "status", &execution_id], None).await
}

/// `POST /api/vision/analyze`
pub async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ProxyError> {
    forward(&state, Method::POST, &["api", "vision", "analyze"], Some(body)).await
}

async fn forward(
    state: &AppState,
    method: Method,
    segments: &[&str],
    body: Option<serde_json::Value>,
) -> Result<Response, ProxyError> {
    let base = state.config.api_base_url.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = upstream_url(base, segments)?;

    let mut request = state.http.request(method, url.clone());
    if let Some(body) = body {
        request = request.json(&body);
    }

    let resp = request.send().await.map_err(|e| {
        tracing::warn!(%url, error = %e, "backend request failed");
        ProxyError::Upstream(e.to_string())
    })?;
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(%url, status = status.as_u16(), bytes = bytes.len(), "proxied backend request");
    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
