//! # portfolio
//!
//! Leptos + WASM personal portfolio: profile, projects, experience and
//! certificates in English or Turkish, light or dark.
//!
//! The session's theme and language live in one `PreferenceStore`
//! (`state::preferences`) that reads `localStorage` and the host color-scheme
//! signal through an injected `EnvironmentProvider` and is handed to views via
//! Leptos context (`state::context`).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
