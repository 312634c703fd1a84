//! WASM bindings for the scribble editor adapter.
//!
//! Exposes the mount configuration entry point, the backend-agnostic
//! command set, the diagram renderers, and service worker registration
//! to the JavaScript host page.

mod editor;

pub use editor::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console tracing.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}
