//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, camera devices, HTML
//! rendering) from page and component logic to improve reuse and testability.

pub mod camera;
pub mod chat;
pub mod markdown;
pub mod poll;
