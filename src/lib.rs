//! # nawe-client
//!
//! Leptos + WASM single-page client for the NaWe school-management system.
//! Authenticates against a hosted Supabase-style backend (GoTrue auth +
//! PostgREST row API) and renders role-scoped dashboards, a demo experience,
//! and a system-check harness.
//!
//! The backend is a black box: sessions, row storage and row-level security
//! all live server-side. This crate owns the client session state machine,
//! the role→capability mapping, form validation, and the page tree.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App).forget();
}
