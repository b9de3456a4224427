//! Workflow trigger widget: starts an external workflow and shows its status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each instance owns its own `WorkflowState` signal and `PollSlot`. Starting a
//! run cancels the previous one, and unmounting cancels whatever is in flight,
//! so no polling loop outlives the widget.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::HttpApi;
use crate::state::workflow::WorkflowState;
#[cfg(feature = "hydrate")]
use crate::util::poll::run_workflow;
use crate::util::poll::PollSlot;

/// Card with a "Run Workflow" button, inline error, status and result.
#[component]
pub fn WorkflowWidget(
    #[prop(into)] workflow_id: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    let state = RwSignal::new(WorkflowState::default());
    let slot = StoredValue::new(PollSlot::default());

    on_cleanup(move || {
        let _ = slot.try_update_value(|s| s.cancel());
    });

    let on_run = move |_| {
        let Some(cancel) = slot.try_update_value(PollSlot::restart) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let workflow_id = workflow_id.clone();
            leptos::task::spawn_local(async move {
                let outcome = run_workflow(
                    &HttpApi,
                    gloo_timers::future::sleep,
                    move |event| {
                        let _ = state.try_update(|s| s.apply(event));
                    },
                    &workflow_id,
                    cancel,
                )
                .await;
                log::debug!("workflow {workflow_id}: {outcome:?}");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&workflow_id, cancel);
        }
    };

    let loading = move || state.with(WorkflowState::is_loading);

    view! {
        <div class="workflow-widget">
            <h3 class="workflow-widget__title">{title}</h3>
            <p class="workflow-widget__description">{description}</p>

            <div class="workflow-widget__actions">
                <button class="btn btn--primary workflow-widget__run" on:click=on_run disabled=loading>
                    {move || if loading() { "Running..." } else { "Run Workflow" }}
                </button>
            </div>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="workflow-widget__error">
                    <p>{move || state.get().error.unwrap_or_default()}</p>
                </div>
            </Show>

            {move || {
                state
                    .get()
                    .run
                    .map(|run| {
                        let status = run.status.to_string();
                        let result = run.result_text();
                        view! {
                            <div class="workflow-widget__status">
                                <h4>"Workflow Status"</h4>
                                <p>
                                    "Status: "
                                    <span class="workflow-widget__status-value">{status}</span>
                                </p>
                                {result
                                    .map(|text| {
                                        view! {
                                            <div class="workflow-widget__result">
                                                <p>"Result:"</p>
                                                <pre>{text}</pre>
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
