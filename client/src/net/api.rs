//! REST helpers for the workflow and vision backend routes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All responses go through [`decode_body`], so a transport failure, a non-2xx
//! status and a JSON `error` field all surface as one `ApiError` the widgets can
//! absorb locally.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalyzeRequest, AnalyzeResponse, ApiError, StatusResponse, TriggerRequest, TriggerResponse};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
const TRIGGER_ENDPOINT: &str = "/api/n8n/trigger";

#[cfg(any(test, feature = "hydrate"))]
const ANALYZE_ENDPOINT: &str = "/api/vision/analyze";

#[cfg(any(test, feature = "hydrate"))]
fn status_endpoint(execution_id: &str) -> String {
    format!("/api/n8n/status/{execution_id}")
}

/// Decode a backend response body.
///
/// A truthy `error` field wins over the HTTP status so the backend's own
/// message reaches the user; otherwise non-2xx maps to [`ApiError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok = (200..300).contains(&status);
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !ok => return Err(ApiError::Status(status)),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    match value.get("error") {
        None | Some(serde_json::Value::Null | serde_json::Value::Bool(false)) => {}
        Some(serde_json::Value::String(message)) => {
            if !message.is_empty() {
                return Err(ApiError::Application(message.clone()));
            }
        }
        Some(other) => return Err(ApiError::Application(other.to_string())),
    }

    if !ok {
        return Err(ApiError::Status(status));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Start/poll seam used by the workflow widget.
#[allow(async_fn_in_trait)]
pub trait WorkflowApi {
    /// `POST /api/n8n/trigger`.
    async fn trigger(&self, request: &TriggerRequest) -> Result<TriggerResponse, ApiError>;
    /// `GET /api/n8n/status/{execution_id}`.
    async fn status(&self, execution_id: &str) -> Result<StatusResponse, ApiError>;
}

/// Analyze seam used by the vision chat.
#[allow(async_fn_in_trait)]
pub trait VisionApi {
    /// `POST /api/vision/analyze`.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ApiError>;
}

/// Same-origin HTTP implementation of both API seams.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_body<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp.text().await.map_err(transport)?;
    decode_body(status, &text)
}

impl WorkflowApi for HttpApi {
    async fn trigger(&self, request: &TriggerRequest) -> Result<TriggerResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(TRIGGER_ENDPOINT)
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_body(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn status(&self, execution_id: &str) -> Result<StatusResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = status_endpoint(execution_id);
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(transport)?;
            read_body(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = execution_id;
            Err(ApiError::Unavailable)
        }
    }
}

impl VisionApi for HttpApi {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(ANALYZE_ENDPOINT)
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_body(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
