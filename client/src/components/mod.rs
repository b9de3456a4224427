//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their widget state locally; nothing is shared through
//! context, so each one can be rendered on its own.

pub mod dashboard_card;
pub mod vision_chat;
pub mod workflow_widget;
