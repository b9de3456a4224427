//! Workflow widget state: the tracked run and its trigger/poll phase.
//!
//! DESIGN
//! ======
//! The poll driver never mutates state directly; it emits [`WorkflowEvent`]s
//! and the widget folds them in with [`WorkflowState::apply`]. This keeps the
//! phase transitions testable without a browser or a timer.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use crate::net::types::{StatusResponse, TriggerResponse, WorkflowStatus};

/// Where a widget instance is in its `Idle -> Triggering -> Polling -> done` cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkflowPhase {
    #[default]
    Idle,
    Triggering,
    Polling,
    Completed,
    Failed,
}

/// One execution of an external workflow, as last reported by the runner.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowRun {
    pub execution_id: String,
    pub status: WorkflowStatus,
    pub result: Option<serde_json::Value>,
}

impl From<TriggerResponse> for WorkflowRun {
    fn from(resp: TriggerResponse) -> Self {
        Self { execution_id: resp.execution_id, status: resp.status, result: resp.result }
    }
}

impl From<StatusResponse> for WorkflowRun {
    fn from(resp: StatusResponse) -> Self {
        Self { execution_id: resp.execution_id, status: resp.status, result: resp.result }
    }
}

impl WorkflowRun {
    /// Pretty-printed result, or `None` when there is nothing worth showing.
    #[must_use]
    pub fn result_text(&self) -> Option<String> {
        match &self.result {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => serde_json::to_string_pretty(value).ok(),
        }
    }
}

/// State transitions produced by the poll driver.
#[derive(Clone, Debug, PartialEq)]
pub enum WorkflowEvent {
    TriggerStarted,
    Triggered(WorkflowRun),
    TriggerFailed(String),
    StatusReceived(WorkflowRun),
}

/// Per-widget state. At most one run is tracked; a new run overwrites it.
#[derive(Clone, Debug, Default)]
pub struct WorkflowState {
    pub phase: WorkflowPhase,
    pub run: Option<WorkflowRun>,
    pub error: Option<String>,
}

impl WorkflowState {
    /// Fold one driver event into the state.
    pub fn apply(&mut self, event: WorkflowEvent) {
        match event {
            WorkflowEvent::TriggerStarted => {
                self.phase = WorkflowPhase::Triggering;
                self.error = None;
            }
            WorkflowEvent::Triggered(run) => {
                self.run = Some(run);
                self.phase = WorkflowPhase::Polling;
            }
            WorkflowEvent::TriggerFailed(message) => {
                self.phase = WorkflowPhase::Idle;
                self.error = Some(message);
            }
            WorkflowEvent::StatusReceived(run) => {
                self.phase = match run.status {
                    WorkflowStatus::Completed => WorkflowPhase::Completed,
                    WorkflowStatus::Failed => WorkflowPhase::Failed,
                    _ => WorkflowPhase::Polling,
                };
                self.run = Some(run);
            }
        }
    }

    /// Whether the loading indicator is shown.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, WorkflowPhase::Triggering | WorkflowPhase::Polling)
    }
}
