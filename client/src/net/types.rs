//! Shared wire-protocol DTOs for the dashboard's HTTP contracts.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies exchanged with the workflow and vision
//! backend routes. Only the fields the widgets read are modeled; unknown keys
//! are ignored so backend additions never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/n8n/trigger`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerRequest {
    /// Identifier of the workflow to start.
    pub workflow_id: String,
    /// Input payload forwarded to the workflow. Always `{}` from the widget.
    pub data: serde_json::Value,
}

impl TriggerRequest {
    /// Start request for `workflow_id` with an empty payload.
    #[must_use]
    pub fn new(workflow_id: impl Into<String>) -> Self {
        Self { workflow_id: workflow_id.into(), data: serde_json::json!({}) }
    }
}

/// Response of `POST /api/n8n/trigger`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerResponse {
    pub execution_id: String,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// Response of `GET /api/n8n/status/{execution_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub execution_id: String,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// Body of `POST /api/vision/analyze`.
///
/// `image_data` is serialized as `null` when no frame was captured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// JPEG data URI of the captured frame, if any.
    pub image_data: Option<String>,
    /// The user's message, exactly as typed.
    pub user_message: String,
}

/// Response of `POST /api/vision/analyze`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub ai_response: String,
}

/// Execution state reported by the workflow runner.
///
/// Unrecognised strings are kept verbatim in `Unknown` so the widget can still
/// show what the runner said.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkflowStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Unknown(String),
}

impl WorkflowStatus {
    /// Wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown(raw) => raw,
        }
    }

    /// `true` once no further state changes are expected.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl Default for WorkflowStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for WorkflowStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<WorkflowStatus> for String {
    fn from(status: WorkflowStatus) -> Self {
        match status {
            WorkflowStatus::Unknown(raw) => raw,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a backend call, as seen by a widget.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    /// The browser's message is kept for logs only.
    #[error("Unable to reach the server. Please try again.")]
    Transport(String),
    /// Non-2xx response without an `error` field.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response carried an `error` field.
    #[error("{0}")]
    Application(String),
    /// The response body did not have the expected shape. The decoder's
    /// message is kept for logs only.
    #[error("Unexpected response from the server.")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}
