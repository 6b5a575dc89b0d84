//! # admin-client
//!
//! Leptos + WASM frontend for the Clipstream admin console.
//!
//! This crate contains the session store, the idle-session guard that gates
//! every protected route, the typed REST client for the platform backend,
//! and the pages/components that render its responses.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
