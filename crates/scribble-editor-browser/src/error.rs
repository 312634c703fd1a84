//! Adapter error taxonomy.
//!
//! Errors here never unwind into the host controller: the public adapter
//! surface catches them, logs, and degrades to a no-op.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// The referenced mount point does not exist in the DOM.
    #[error("mount point `{0}` not found")]
    MissingMount(String),

    /// The rich-editor library is not loaded on the page.
    #[error("rich editor library is not loaded")]
    BackendUnavailable,

    /// A browser API call failed.
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for AdapterError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
