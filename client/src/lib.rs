//! # client
//!
//! Leptos + WASM frontend for the toolbox: a catalog of independent utility
//! tools grouped by category, a dispatcher that renders a tool by id, and a
//! small admin screen for the server-side tool store.
//!
//! This crate contains pages, components, the tool widgets and their
//! registry, shared UI state, and REST helpers. Catalog data and the
//! registry/dispatch core live in the `catalog` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod tools;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
