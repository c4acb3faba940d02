//! # rollboard
//!
//! Leptos + WASM frontend for the staff-facing screens of a classroom
//! attendance application: a home board with sort/search/filter and an
//! attendance-taking ("roll") mode, and an activity history view.
//!
//! This crate contains pages, components, application state, and the REST
//! fetch layer. It ships no server; a host mounts [`app::App`] (or renders
//! [`app::shell`] for SSR) and serves the small `/api` surface the client
//! consumes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point for hydrate builds.
///
/// Installs the panic hook, initializes console logging, and mounts the
/// application onto the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
