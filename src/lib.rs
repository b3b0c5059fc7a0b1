//! # mission-control
//!
//! Leptos + WASM front end for the OpenClaw Mission Control dashboard:
//! boards, tasks, and the internal wiki, backed by the Mission Control REST
//! API and a hosted identity provider.
//!
//! The crate is organized around the auth-gating layer in `auth` (publishable
//! key validation, provider mount guard, capability facade), the REST client
//! in `net`, the per-page load/view state machine in `state`, and route-level
//! screens in `pages`.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client app to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
