//! Submit driver for the vision chat.
//!
//! One call handles one message: check it against the current flags, take a
//! snapshot while the camera is on, record the user bubble, send, and record
//! the reply or the fallback. Every failure ends inside the thread; nothing is
//! returned to the caller as an error.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::VisionApi;
use crate::net::types::AnalyzeRequest;
use crate::state::vision::{ChatEvent, ChatFlags, should_submit};

/// How a call to [`submit_message`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: a request is in flight, the input is blank with the
    /// camera off, or the chat is gone.
    Skipped,
    /// The assistant's reply was appended.
    Replied,
    /// The call failed and the fallback reply was appended.
    Failed,
}

/// Send `text` through `api`, feeding every transition to `apply`.
///
/// `flags` reads the chat's current state; `None` means the chat no longer
/// exists. `capture` is only called while the camera is on.
pub async fn submit_message<A, R, C>(
    api: &A,
    flags: R,
    capture: C,
    apply: impl Fn(ChatEvent),
    text: String,
) -> SubmitOutcome
where
    A: VisionApi,
    R: FnOnce() -> Option<ChatFlags>,
    C: FnOnce() -> Option<String>,
{
    let Some(flags) = flags() else {
        return SubmitOutcome::Skipped;
    };
    if flags.loading || !should_submit(&text, flags.capturing) {
        return SubmitOutcome::Skipped;
    }

    let image_data = if flags.capturing { capture() } else { None };
    let request = AnalyzeRequest { image_data, user_message: text };
    apply(ChatEvent::Submitted(request.clone()));

    match api.analyze(&request).await {
        Ok(resp) => {
            apply(ChatEvent::Replied(Ok(resp)));
            SubmitOutcome::Replied
        }
        Err(e) => {
            log::error!("error sending message: {e:?}");
            apply(ChatEvent::Replied(Err(e)));
            SubmitOutcome::Failed
        }
    }
}
