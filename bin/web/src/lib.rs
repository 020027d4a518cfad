//! staffdesk browser UI.
//!
//! A client-rendered Leptos application: every route is gated in the browser
//! against the session held in `localStorage`, and every page talks to the
//! REST API through [`staffdesk_client::ApiClient`].
//!
//! Build with the `csr` feature for the browser bundle, or with the `server`
//! feature for the binary that hosts the built bundle.

#![allow(non_snake_case)]

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod guard;
pub mod pages;

/// Mounts the application on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
