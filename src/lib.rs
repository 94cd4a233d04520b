//! # roomcraft-client
//!
//! Leptos + WASM frontend for the AI interior-design workflow: pick or
//! upload a room, pick or upload a piece of furniture, and ask the backend
//! to composite the two into a rendered result. A second screen uploads a
//! photo and shows AI-generated shopping queries with matched product links.
//!
//! This crate contains pages, components, application state, wire types,
//! and the HTTP gateway. All state lives in plain structs so the selection
//! and request lifecycle is unit-testable without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
