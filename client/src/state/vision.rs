//! Vision chat conversation state.
//!
//! The thread is append-only and lives as long as the page; nothing is
//! persisted.

#[cfg(test)]
#[path = "vision_test.rs"]
mod vision_test;

use crate::net::types::{AnalyzeRequest, AnalyzeResponse, ApiError};

/// Assistant reply used whenever the analyze call fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One bubble in the thread.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationMessage {
    /// Stable key for the rendered list.
    pub id: String,
    pub role: Role,
    pub text: String,
    /// JPEG data URI captured alongside a user message.
    pub image: Option<String>,
}

impl ConversationMessage {
    fn new(role: Role, text: String, image: Option<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, text, image }
    }
}

#[derive(Clone, Debug, Default)]
pub struct VisionChatState {
    /// Oldest first.
    pub messages: Vec<ConversationMessage>,
    pub loading: bool,
    pub capturing: bool,
}

/// The part of the chat state a new submission is checked against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatFlags {
    pub loading: bool,
    pub capturing: bool,
}

/// Transition fed to [`VisionChatState::apply`] by the submit driver.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatEvent {
    /// The user's message was accepted and is being sent.
    Submitted(AnalyzeRequest),
    /// The analyze call finished.
    Replied(Result<AnalyzeResponse, ApiError>),
}

/// Blank input is only sent when the camera is on.
#[must_use]
pub fn should_submit(text: &str, capturing: bool) -> bool {
    !text.trim().is_empty() || capturing
}

impl VisionChatState {
    #[must_use]
    pub fn flags(&self) -> ChatFlags {
        ChatFlags { loading: self.loading, capturing: self.capturing }
    }

    /// The camera preview is only shown while capturing.
    #[must_use]
    pub fn preview_hidden(&self) -> bool {
        !self.capturing
    }

    pub fn apply(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Submitted(request) => {
                self.messages.push(ConversationMessage::new(Role::User, request.user_message, request.image_data));
                self.loading = true;
            }
            ChatEvent::Replied(reply) => {
                let text = match reply {
                    Ok(resp) => resp.ai_response,
                    Err(_) => FALLBACK_REPLY.to_owned(),
                };
                self.messages.push(ConversationMessage::new(Role::Assistant, text, None));
                self.loading = false;
            }
        }
    }
}
