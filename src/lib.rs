//! # noteum-login
//!
//! Leptos + WASM login screen for the Noteum web application.
//!
//! The crate renders the login form, validates the e-mail and password
//! fields, and drives the two-stage "log in, then fetch profile" pipeline
//! against the Noteum API. On success it writes the session user, persists the
//! `auth` flag, and routes to the dashboard.
//!
//! ARCHITECTURE
//! ============
//! `login` owns the pipeline and talks to its collaborators only through
//! traits (`ApiClient`, `SessionStore`, `SessionFlag`, `Notifier`,
//! `Navigator`, `BusyFlag`). `pages` wires those traits to Leptos signals and
//! browser APIs, so the pipeline itself runs natively under unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod login;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
