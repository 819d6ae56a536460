#![recursion_limit = "256"]

//! WASM entry point for the portfolio.
//!
//! Loaded by the hydration scripts the server injects; it attaches the
//! reactive system to the server-rendered page so the language switch,
//! project filters, modal and contact form become interactive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the server-rendered body with `app::component`.
pub fn hydrate() {
    use app::component;
    // Browser console logging and readable panics.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating portfolio");
    leptos::mount::hydrate_body(component);
}
