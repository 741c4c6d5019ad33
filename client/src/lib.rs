//! # client
//!
//! Leptos + WASM browser frontend for the movie booking service.
//!
//! Booking logic lives in the `booking` crate; this crate wires it to the
//! browser: a gloo-net [`net::transport::GlooTransport`], `localStorage`
//! identity persistence, and the login, movie, showtime and seat map screens.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
