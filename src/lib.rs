// lib.rs - Root module for the foody_zone library
//
// The library is compiled twice by cargo-leptos: once natively for the
// server binary (`ssr`) and once to WASM for the browser (`hydrate`).

/// The Leptos storefront application
pub mod web_app;

/// WASM entry point: attaches the client to the server-rendered markup
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
