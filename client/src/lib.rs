//! # tripdesk-client
//!
//! Leptos + WASM frontend for managing business trips and their meetings
//! against the `/v1` trips REST API.
//!
//! This crate contains the page, components, application state and reducer,
//! and the REST client. The `server` crate renders it with the `ssr` feature;
//! the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
