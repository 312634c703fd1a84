//! JavaScript-facing adapter API.
//!
//! Thin wrappers over the browser adapter: convert `js_sys::Function`
//! callbacks into the adapter's callback pair and forward everything
//! else as-is. All entry points keep the adapter's no-throw guarantee.

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use scribble_editor_browser::{IntentCallbacks, adapter, diagrams, service_worker};

/// Bind a mount point to an editing backend.
///
/// `rich_mode` selects the modal rich editor; when the rich library is
/// not loaded the mount stays on the plain surface. Calling again on a
/// configured mount re-registers the callbacks without disturbing the
/// buffer. A missing mount point is a silent no-op.
#[wasm_bindgen(js_name = configureEditor)]
pub fn configure_editor(
    mount_id: &str,
    initial_content: &str,
    on_save: js_sys::Function,
    on_quit: Option<js_sys::Function>,
    rich_mode: bool,
) {
    let callbacks = IntentCallbacks {
        on_save: Rc::new(move |content| {
            if let Err(err) = on_save.call1(&JsValue::NULL, &JsValue::from_str(&content)) {
                tracing::warn!(?err, "save callback threw");
            }
        }),
        on_quit: Rc::new(move || {
            if let Some(on_quit) = &on_quit {
                if let Err(err) = on_quit.call0(&JsValue::NULL) {
                    tracing::warn!(?err, "quit callback threw");
                }
            }
        }),
    };
    adapter::configure(mount_id, initial_content, callbacks, rich_mode);
}

/// Live content of the mount's active backend.
#[wasm_bindgen(js_name = getContent)]
pub fn get_content(mount_id: &str) -> String {
    adapter::get_content(mount_id)
}

/// Replace the mount's whole buffer.
#[wasm_bindgen(js_name = setContent)]
pub fn set_content(mount_id: &str, text: &str) {
    adapter::set_content(mount_id, text);
}

/// Wrap the current selection in `prefix`/`suffix`, or drop a marker
/// pair at a collapsed cursor.
#[wasm_bindgen(js_name = wrapSelection)]
pub fn wrap_selection(mount_id: &str, prefix: &str, suffix: &str) {
    adapter::wrap_selection(mount_id, prefix, suffix);
}

/// Insert `text` at the cursor, replacing any selection.
#[wasm_bindgen(js_name = insertTextAtCursor)]
pub fn insert_text_at_cursor(mount_id: &str, text: &str) {
    adapter::insert_text_at_cursor(mount_id, text);
}

/// Toggle the heading marker on the cursor's line at `level`.
#[wasm_bindgen(js_name = toggleHeading)]
pub fn toggle_heading(mount_id: &str, level: u32) {
    adapter::toggle_heading(mount_id, level as usize);
}

/// Render all `.mermaid` blocks in the document.
#[wasm_bindgen(js_name = renderFlowDiagrams)]
pub fn render_flow_diagrams() {
    diagrams::render_flow_diagrams();
}

/// Render graphviz dot source into the given element.
#[wasm_bindgen(js_name = renderGraphDiagram)]
pub fn render_graph_diagram(element_id: &str, dot_source: &str) {
    diagrams::render_graph_diagram(element_id, dot_source);
}

/// Hand embedded-diagram XML to the page's viewer.
#[wasm_bindgen(js_name = renderEmbeddedDiagram)]
pub fn render_embedded_diagram(element_id: &str, xml: &str) {
    diagrams::render_embedded_diagram(element_id, xml);
}

/// Register the offline-cache service worker at `/sw.js`.
#[wasm_bindgen(js_name = registerServiceWorker)]
pub async fn register_service_worker() -> Result<(), JsValue> {
    service_worker::register_service_worker()
        .await
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
