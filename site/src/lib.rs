//! # site
//!
//! Leptos frontend for the GOMORRA.AI landing page: navigation, hero,
//! feature grid, call-to-action and about sections, plus two cosmetic
//! effects (headline parallax on scroll, portrait tilt under the pointer)
//! that are disabled on mobile-width viewports.
//!
//! Built twice: with `ssr` for the `gomorra` server binary and with
//! `hydrate` as the WASM bundle that takes over the server-rendered page.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
