//! # assistant-widget
//!
//! Leptos + WASM floating chat panel. Collects a question, posts it with a
//! short window of conversation history to a remote assistant endpoint, and
//! renders the reply (or a fixed fallback message when anything fails).
//!
//! Conversation state and response handling are plain Rust and tested
//! natively; browser-only code sits behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
