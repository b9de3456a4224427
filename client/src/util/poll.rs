//! Trigger-then-poll driver for the workflow widget.
//!
//! The loop is sequential: each tick sleeps [`POLL_INTERVAL`], fetches the
//! status, applies it, and only then sleeps again, so responses within one run
//! are applied in request order. There is no iteration cap or timeout; a run
//! that never reaches a terminal status is polled until it is cancelled.
//!
//! CANCELLATION
//! ============
//! Every run owns a [`PollCancel`]. The widget keeps the live one in a
//! [`PollSlot`] and cancels it on retrigger and on teardown. A cancelled run
//! applies nothing further, so a late response from an orphaned run can never
//! overwrite the newer run.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::net::api::WorkflowApi;
use crate::net::types::{TriggerRequest, WorkflowStatus};
use crate::state::workflow::{WorkflowEvent, WorkflowRun};

/// Delay between status requests.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Shared cancellation flag for one polling run.
#[derive(Clone, Debug, Default)]
pub struct PollCancel(Arc<AtomicBool>);

impl PollCancel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Holds the cancellation handle of the widget's current run, if any.
#[derive(Debug, Default)]
pub struct PollSlot {
    current: Option<PollCancel>,
}

impl PollSlot {
    /// Cancel the run in flight (if any) and hand out a handle for a new one.
    pub fn restart(&mut self) -> PollCancel {
        self.cancel();
        let next = PollCancel::new();
        self.current = Some(next.clone());
        next
    }

    /// Cancel and forget the current run.
    pub fn cancel(&mut self) {
        if let Some(current) = self.current.take() {
            current.cancel();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.as_ref().is_some_and(|c| !c.is_cancelled())
    }
}

/// How a call to [`run_workflow`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// The start request failed; polling never began.
    TriggerFailed,
    /// A terminal status was observed and applied.
    Finished(WorkflowStatus),
    /// The run was cancelled before reaching a terminal status.
    Cancelled,
}

/// Start `workflow_id` and poll its status until it completes, fails, or
/// `cancel` fires.
///
/// `sleep` supplies the timer (gloo-timers in the browser) and `apply`
/// receives every state transition in order.
pub async fn run_workflow<A, S, F>(
    api: &A,
    sleep: S,
    apply: impl Fn(WorkflowEvent),
    workflow_id: &str,
    cancel: PollCancel,
) -> PollOutcome
where
    A: WorkflowApi,
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    if cancel.is_cancelled() {
        return PollOutcome::Cancelled;
    }
    apply(WorkflowEvent::TriggerStarted);

    let triggered = api.trigger(&TriggerRequest::new(workflow_id)).await;
    if cancel.is_cancelled() {
        return PollOutcome::Cancelled;
    }
    let execution_id = match triggered {
        Ok(resp) => {
            let run = WorkflowRun::from(resp);
            let execution_id = run.execution_id.clone();
            apply(WorkflowEvent::Triggered(run));
            execution_id
        }
        Err(e) => {
            log::error!("workflow {workflow_id}: trigger failed: {e:?}");
            apply(WorkflowEvent::TriggerFailed(e.to_string()));
            return PollOutcome::TriggerFailed;
        }
    };

    loop {
        sleep(POLL_INTERVAL).await;
        if cancel.is_cancelled() {
            return PollOutcome::Cancelled;
        }

        let polled = api.status(&execution_id).await;
        if cancel.is_cancelled() {
            return PollOutcome::Cancelled;
        }
        match polled {
            Ok(resp) => {
                let status = resp.status.clone();
                apply(WorkflowEvent::StatusReceived(WorkflowRun::from(resp)));
                if status.is_terminal() {
                    return PollOutcome::Finished(status);
                }
            }
            Err(e) => log::warn!("workflow {workflow_id}: status poll for {execution_id} failed: {e:?}"),
        }
    }
}
