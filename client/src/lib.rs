//! # portfolio_client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains pages, layout components, application state, the
//! contact-submission network layer, and the motion/theme utilities. The
//! server crate consumes it with the `ssr` feature for server rendering;
//! the browser build enables `hydrate`.

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
