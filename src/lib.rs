//! # learnhub
//!
//! Leptos + WASM frontend for the LearnHub learning-resource platform.
//!
//! This crate contains pages, components, application state, and the
//! authorized request layer over the platform's REST API. Rendering is
//! SSR + hydration; browser-only behavior sits behind the `hydrate`
//! feature so the pure logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// WASM entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
