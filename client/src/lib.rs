//! # client
//!
//! Leptos + WASM frontend for the CF admin tool.
//!
//! This crate wires the `gate` authorization core into the browser: it
//! provides the auth state as context, guards protected routes, and talks to
//! the hosted auth backend over HTTP. The `ssr` feature exposes the app and
//! shell to the Axum host; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
