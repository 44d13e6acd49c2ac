//! # client
//!
//! Leptos + WASM frontend for the Roamly tour-booking application.
//!
//! This crate contains pages, components, application state, the wire types
//! for the external booking backend, and the SSR data-loading layer. All
//! business rules (pricing, booking transitions, role enforcement) live in
//! the backend API; this crate is presentation, thin service wrappers, and
//! client-side session state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
