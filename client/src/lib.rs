//! # client
//!
//! Leptos + WASM frontend for the Asynqmon login screen.
//!
//! The crate renders the login card, the toaster and the not-found page, and
//! wires the browser implementations of the `login` crate's ports (Firebase
//! popup sign-in, `gloo-net`, `window.location`, `gloo-timers`) into a
//! [`login::LoginFlow`]. Browser-only code is gated behind the `hydrate`
//! feature; the `ssr` build renders the same views on the host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
