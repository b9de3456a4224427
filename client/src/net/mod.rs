//! Networking modules for the dashboard's backend routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP calls and the seams widgets are written against, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
