//! # client
//!
//! Leptos frontend for the folio portfolio site.
//!
//! This crate contains the content model, stateless components, the single
//! portfolio page, and the root `App`. It renders on the server (`ssr`) and
//! hydrates in the browser (`hydrate`), where it also drives viewport reveals.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
