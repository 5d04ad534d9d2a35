//! # workbench-ui
//!
//! Leptos + WASM widgets for the workbench data-workflow editor: the
//! lazily paginated, resizable output pane and the column rename editor.
//!
//! Widget logic lives in `state` as browser-free state machines; `components`
//! binds them to the DOM and to the REST calls in `net`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: route logs and panics to the browser console, then
/// hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
