//! Supplement checker web shell
//!
//! Leptos-based WASM frontend: legal banner, navbar, routed content, footer.

mod app;
mod components;
mod mount;
mod pages;

pub use app::App;
pub use mount::mount_app;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match mount_app(checker_core::MOUNT_ID) {
        Ok(()) => {}
        Err(e) if e.is_fatal() => tracing::error!("Nothing rendered: {}", e),
        Err(e) => tracing::warn!("{}", e),
    }
}
