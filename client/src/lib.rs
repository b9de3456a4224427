//! # jarvis-client
//!
//! Leptos + WASM frontend for the J.A.R.V.I.S personal dashboard.
//!
//! This crate contains the home page with its link grid, the workflow trigger
//! widget, the vision chat widget, their state models, and the HTTP seams they
//! talk to. The `hydrate` feature builds the browser bundle; `ssr` builds the
//! variant rendered by the `jarvis` host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
