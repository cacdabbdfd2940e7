//! # client
//!
//! Leptos + WASM frontend for the todo portal: login/register, the user
//! to-do dashboard and the admin panel.
//!
//! Session ownership, persistence and the route guard rules live in the
//! `session` crate; this crate wires them into reactive context, talks to the
//! REST API and renders the pages.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
