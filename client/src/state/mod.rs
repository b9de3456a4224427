//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`workflow`, `vision`) plus the static dashboard
//! configuration, so each component depends on one small model.

pub mod dashboard;
pub mod vision;
pub mod workflow;
