//! # client
//!
//! Leptos + WASM host shell for the Smart Task dashboard. Supplies the router,
//! sidebar navigation and session user record, and mounts the `TaskBot`
//! assistant widget, wiring real timers, pointer events and the two page
//! callbacks into `taskbot::WidgetController`.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A logger may already be installed on hot reload.
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("smart task client starting");
    leptos::mount::mount_to_body(app::App);
}
