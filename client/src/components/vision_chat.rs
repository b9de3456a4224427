//! Vision chat: camera preview, conversation thread and prompt input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting sends the typed text plus, while the camera is on, a snapshot of
//! the current frame to the analyze route. Every failure ends as a fallback
//! assistant bubble; camera permission failures are only logged.
//!
//! RESOURCES
//! =========
//! The camera stream lives in a `CaptureSession` owned by this component. It
//! is released on "Stop Camera", on unmount (cleanup hook), and when the
//! session itself is dropped.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::HttpApi;
use crate::state::vision::{ConversationMessage, Role, VisionChatState};
#[cfg(feature = "hydrate")]
use crate::state::vision::ChatEvent;
#[cfg(feature = "hydrate")]
use crate::util::camera::{BrowserCamera, CaptureSession, FrameSource};
#[cfg(feature = "hydrate")]
use crate::util::chat::submit_message;
use crate::util::markdown::render_markdown_html;

/// Chat panel that can attach camera snapshots to messages.
#[component]
pub fn VisionChat() -> impl IntoView {
    let chat = RwSignal::new(VisionChatState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let camera = StoredValue::new_local(CaptureSession::<BrowserCamera>::default());
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        let _ = camera.try_update_value(CaptureSession::stop);
    });

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.loading;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let start_camera = move || {
        #[cfg(feature = "hydrate")]
        {
            let (Some(video), Some(canvas)) = (video_ref.get_untracked(), canvas_ref.get_untracked()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match BrowserCamera::acquire(video, canvas).await {
                    Ok(source) => {
                        let mut pending = Some(source);
                        let _ = camera.try_update_value(|session| {
                            if let Some(source) = pending.take() {
                                session.start(source);
                            }
                        });
                        // Unmounted while the permission prompt was open.
                        if let Some(mut orphan) = pending {
                            orphan.release();
                            return;
                        }
                        let _ = chat.try_update(|s| s.capturing = true);
                    }
                    Err(e) => log::error!("error accessing camera: {e}"),
                }
            });
        }
    };

    let stop_camera = move || {
        #[cfg(feature = "hydrate")]
        {
            let _ = camera.try_update_value(CaptureSession::stop);
        }
        chat.update(|s| s.capturing = false);
    };

    let do_send = move || {
        let text = input.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome = submit_message(
                    &HttpApi,
                    || chat.try_with_untracked(VisionChatState::flags),
                    || camera.try_with_value(CaptureSession::capture_image).flatten(),
                    move |event| {
                        if matches!(event, ChatEvent::Submitted(_)) {
                            input.set(String::new());
                        }
                        let _ = chat.try_update(|s| s.apply(event));
                    },
                    text,
                )
                .await;
                log::debug!("vision chat submit: {outcome:?}");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_camera_toggle = move |_| {
        if chat.with_untracked(|s| s.capturing) {
            stop_camera();
        } else {
            start_camera();
        }
    };

    let capturing = move || chat.with(|s| s.capturing);
    let loading = move || chat.with(|s| s.loading);

    view! {
        <div class="vision-chat">
            <div class="vision-chat__preview" hidden=move || chat.with(VisionChatState::preview_hidden)>
                <video class="vision-chat__video" node_ref=video_ref autoplay=true muted=true></video>
                <canvas class="vision-chat__canvas" node_ref=canvas_ref hidden=true></canvas>
            </div>

            <div class="vision-chat__messages" node_ref=messages_ref>
                <For
                    each=move || chat.with(|s| s.messages.clone())
                    key=|msg: &ConversationMessage| msg.id.clone()
                    children=move |msg: ConversationMessage| {
                        let is_user = msg.role == Role::User;
                        let bubble = if is_user {
                            view! { <div class="vision-chat__bubble">{msg.text}</div> }.into_any()
                        } else {
                            let rendered = render_markdown_html(&msg.text);
                            view! { <div class="vision-chat__bubble vision-chat__markdown" inner_html=rendered></div> }
                                .into_any()
                        };
                        view! {
                            <div
                                class="vision-chat__message"
                                class:vision-chat__message--user=is_user
                                class:vision-chat__message--assistant=!is_user
                            >
                                <div class="vision-chat__stack">
                                    {msg
                                        .image
                                        .map(|src| {
                                            view! { <img class="vision-chat__thumbnail" src=src alt="Captured"/> }
                                        })}
                                    {bubble}
                                </div>
                            </div>
                        }
                    }
                />

                {move || loading().then(|| view! { <div class="vision-chat__loading">"Analyzing..."</div> })}
            </div>

            <form class="vision-chat__form" on:submit=on_submit>
                <button
                    type="button"
                    class="btn vision-chat__camera"
                    class:btn--danger=capturing
                    class:btn--primary=move || !capturing()
                    on:click=on_camera_toggle
                >
                    {move || if capturing() { "Stop Camera" } else { "Start Camera" }}
                </button>
                <input
                    class="vision-chat__input"
                    type="text"
                    placeholder="Ask JARVIS anything..."
                    disabled=loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary vision-chat__send" disabled=loading>
                    "Send"
                </button>
            </form>
        </div>
    }
}
