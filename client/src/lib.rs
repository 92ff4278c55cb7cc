//! # client
//!
//! Leptos + WASM frontend for the grounded FAQ assistant. Renders the chat
//! transcript, relays user messages to the server's `/chat` endpoint, and
//! displays answers with their provenance metadata (grounding sources and a
//! memory-usage badge).
//!
//! Built as a CSR bundle with trunk and served statically by `server`.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// WASM entry point: set up console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
