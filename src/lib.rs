// lib.rs - Root module for the scent_catalog library
//
// The filter engine in `web_app::filters` builds without any feature.
// The Leptos app, hooks and server functions need `ssr` or `hydrate`;
// the catalog HTTP client needs `api-client`.

/// Sample catalog records shared by unit and integration tests
pub mod fixtures;

pub mod web_app;

/// WASM entry point: hydrates the server-rendered app in the browser
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
