//! The adapter-owned mount registry.
//!
//! Maps mount-point identifiers to the live backend instance and the
//! registered intent callbacks. The registry *is* the probe: "is a rich
//! editor attached here" is an explicit O(1) lookup, never DOM
//! inspection. Globally defined commands resolve the currently relevant
//! instance's callbacks through the registry at fire time, not at
//! definition time, so re-registration always wins.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

use crate::backend::{Backend, BackendKind};

/// Externally supplied save/quit intent callbacks.
///
/// At most one registered pair per mount; re-registration replaces,
/// never stacks.
#[derive(Clone)]
pub struct IntentCallbacks {
    pub on_save: Rc<dyn Fn(String)>,
    pub on_quit: Rc<dyn Fn()>,
}

pub(crate) struct MountState {
    pub backend: Backend,
    pub callbacks: IntentCallbacks,
    /// Save-chord keydown listener for the plain surface. Dropping the
    /// state removes the listener, so reconfiguring never stacks them.
    pub key_listener: Option<EventListener>,
    /// Keeps the rich backend's key-binding handler alive for the
    /// lifetime of the instance.
    pub rich_keys: Option<Closure<dyn FnMut(JsValue)>>,
}

thread_local! {
    static REGISTRY: RefCell<HashMap<String, MountState>> = RefCell::new(HashMap::new());
}

/// Probe: the kind of backend currently bound to the mount point, if any.
pub fn probe(mount_id: &str) -> Option<BackendKind> {
    REGISTRY.with(|r| r.borrow().get(mount_id).map(|s| s.backend.kind()))
}

/// Bind a mount point, replacing (and dropping) any previous state.
pub(crate) fn insert(mount_id: &str, state: MountState) {
    REGISTRY.with(|r| {
        r.borrow_mut().insert(mount_id.to_string(), state);
    });
}

pub(crate) fn remove(mount_id: &str) {
    REGISTRY.with(|r| {
        r.borrow_mut().remove(mount_id);
    });
}

/// Clone out the backend bound to the mount, releasing the registry
/// borrow before the caller touches the DOM.
pub(crate) fn backend(mount_id: &str) -> Option<Backend> {
    REGISTRY.with(|r| r.borrow().get(mount_id).map(|s| s.backend.clone()))
}

/// Replace the registered callback pair, keeping everything else.
pub(crate) fn replace_callbacks(mount_id: &str, callbacks: IntentCallbacks) -> bool {
    REGISTRY.with(|r| match r.borrow_mut().get_mut(mount_id) {
        Some(state) => {
            state.callbacks = callbacks;
            true
        }
        None => false,
    })
}

/// Fire the save intent for a mount.
///
/// Reads the live content at fire time and invokes the callback outside
/// the registry borrow, so the callback may re-enter `configure`.
pub fn fire_save(mount_id: &str) {
    let hit = REGISTRY.with(|r| {
        r.borrow()
            .get(mount_id)
            .map(|s| (s.backend.clone(), s.callbacks.on_save.clone()))
    });
    let Some((backend, on_save)) = hit else {
        tracing::debug!(mount_id, "save intent for unbound mount, ignoring");
        return;
    };
    let content = backend.content();
    tracing::debug!(mount_id, len = content.len(), "save intent");
    on_save(content);
}

/// Fire the quit intent for a mount.
pub fn fire_quit(mount_id: &str) {
    let on_quit = REGISTRY.with(|r| r.borrow().get(mount_id).map(|s| s.callbacks.on_quit.clone()));
    let Some(on_quit) = on_quit else {
        tracing::debug!(mount_id, "quit intent for unbound mount, ignoring");
        return;
    };
    tracing::debug!(mount_id, "quit intent");
    on_quit();
}
