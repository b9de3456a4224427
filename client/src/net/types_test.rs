use super::*;

// =============================================================
// WorkflowStatus
// =============================================================

#[test]
fn workflow_status_parses_known_values() {
    assert_eq!(serde_json::from_str::<WorkflowStatus>("\"pending\"").unwrap(), WorkflowStatus::Pending);
    assert_eq!(serde_json::from_str::<WorkflowStatus>("\"running\"").unwrap(), WorkflowStatus::Running);
    assert_eq!(serde_json::from_str::<WorkflowStatus>("\"completed\"").unwrap(), WorkflowStatus::Completed);
    assert_eq!(serde_json::from_str::<WorkflowStatus>("\"failed\"").unwrap(), WorkflowStatus::Failed);
}

#[test]
fn workflow_status_keeps_unrecognised_text() {
    let status = serde_json::from_str::<WorkflowStatus>("\"waiting\"").unwrap();
    assert_eq!(status, WorkflowStatus::Unknown("waiting".to_owned()));
    assert_eq!(status.to_string(), "waiting");
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"waiting\"");
}

#[test]
fn workflow_status_is_case_sensitive() {
    let status = serde_json::from_str::<WorkflowStatus>("\"Completed\"").unwrap();
    assert!(!status.is_terminal());
}

#[test]
fn only_completed_and_failed_are_terminal() {
    assert!(WorkflowStatus::Completed.is_terminal());
    assert!(WorkflowStatus::Failed.is_terminal());
    assert!(!WorkflowStatus::Pending.is_terminal());
    assert!(!WorkflowStatus::Running.is_terminal());
    assert!(!WorkflowStatus::default().is_terminal());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn trigger_request_carries_id_and_empty_payload() {
    let body = serde_json::to_value(TriggerRequest::new("daily-briefing")).unwrap();
    assert_eq!(body, serde_json::json!({ "workflow_id": "daily-briefing", "data": {} }));
}

#[test]
fn analyze_request_serializes_missing_image_as_null() {
    let body = AnalyzeRequest { image_data: None, user_message: "What is this?".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "image_data": null, "user_message": "What is this?" })
    );
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn status_response_tolerates_missing_status_and_result() {
    let resp: StatusResponse = serde_json::from_str(r#"{"execution_id":"e-1"}"#).unwrap();
    assert_eq!(resp.execution_id, "e-1");
    assert_eq!(resp.status, WorkflowStatus::Unknown(String::new()));
    assert!(resp.result.is_none());
}

#[test]
fn trigger_response_keeps_structured_result() {
    let resp: TriggerResponse =
        serde_json::from_str(r#"{"execution_id":"e-2","status":"running","result":{"step":1},"extra":true}"#).unwrap();
    assert_eq!(resp.status, WorkflowStatus::Running);
    assert_eq!(resp.result, Some(serde_json::json!({ "step": 1 })));
}

#[test]
fn analyze_response_requires_ai_response() {
    assert!(serde_json::from_str::<AnalyzeResponse>("{}").is_err());
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_messages_are_user_facing() {
    assert_eq!(ApiError::Application("quota exceeded".to_owned()).to_string(), "quota exceeded");
    assert_eq!(ApiError::Status(502).to_string(), "request failed: 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn transport_and_decode_errors_hide_internal_detail() {
    let transport = ApiError::Transport("TypeError: Failed to fetch".to_owned());
    let decode = ApiError::Decode("missing field `execution_id` at line 1 column 2".to_owned());

    assert_eq!(transport.to_string(), "Unable to reach the server. Please try again.");
    assert_eq!(decode.to_string(), "Unexpected response from the server.");
    assert!(!decode.to_string().contains("execution_id"));
    assert!(format!("{decode:?}").contains("missing field `execution_id`"));
}
