//! Browser adapter layer for the scribble editor.
//!
//! Binds a mount point's buffer to whichever editing backend is active -
//! the modal rich editor or the plain textarea surface - and routes the
//! backend-agnostic command set to it. All buffer state lives in the
//! mounted backend instance; the adapter never caches a parallel copy.
//!
//! # Architecture
//!
//! - `registry`: mount point id -> live backend instance + intent callbacks
//! - `adapter`: mode transitions and the command router
//! - `surface` / `rich`: the two backends
//! - `diagrams`: fire-and-forget render collaborators
//! - `service_worker`: offline asset cache registration
//!
//! This crate assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Re-exports
//!
//! This crate re-exports `scribble-editor-core` for convenience, so
//! consumers only need to depend on `scribble-editor-browser`.

// Re-export core crate
pub use scribble_editor_core;
pub use scribble_editor_core::*;

pub mod adapter;
pub mod backend;
pub mod diagrams;
pub mod error;
pub mod registry;
pub mod rich;
pub mod service_worker;
pub mod surface;

pub use backend::{Backend, BackendKind};
pub use error::AdapterError;
pub use registry::{IntentCallbacks, probe};
pub use rich::RichEditor;
pub use surface::PlainSurface;
