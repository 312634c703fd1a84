//! Mode transitions and the backend-agnostic command router.
//!
//! `configure` is the single entry point the host controller calls on
//! every mount/remount; it is safe to call redundantly. The router
//! functions dispatch to whichever backend is currently bound. Every
//! public function here upholds the adapter guarantee: never throw into
//! the caller, degrade to a no-op.

use std::cell::Cell;
use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use scribble_editor_core::edit;

use crate::backend::Backend;
use crate::error::AdapterError;
use crate::registry::{self, IntentCallbacks, MountState};
use crate::rich::{self, RichEditor};
use crate::surface::PlainSurface;

/// Bind a mount point to an editing backend.
///
/// Reuses, creates, or tears down the backend as needed to reach the
/// requested mode, preserving buffer content across the switch, and
/// (re)registers the save/quit callbacks. A missing mount point is a
/// silent no-op.
pub fn configure(
    mount_id: &str,
    initial_content: &str,
    callbacks: IntentCallbacks,
    rich_mode: bool,
) {
    match try_configure(mount_id, initial_content, callbacks, rich_mode) {
        Ok(()) => {}
        Err(AdapterError::MissingMount(id)) => {
            tracing::debug!(mount_id = %id, "mount point not found, configure is a no-op");
        }
        Err(err) => {
            tracing::warn!(mount_id, %err, "configure failed, leaving mount untouched");
        }
    }
}

fn try_configure(
    mount_id: &str,
    initial_content: &str,
    callbacks: IntentCallbacks,
    rich_mode: bool,
) -> Result<(), AdapterError> {
    let Some(surface) = PlainSurface::find(mount_id) else {
        return Err(AdapterError::MissingMount(mount_id.to_string()));
    };

    let attached_rich = match registry::backend(mount_id) {
        Some(Backend::Rich(editor)) => Some(editor),
        _ => None,
    };

    if rich_mode {
        if let Some(editor) = attached_rich {
            // Idempotent re-attach: ensure the modal keymap, replace the
            // callback pair, touch nothing else.
            editor.set_vim_keymap();
            registry::replace_callbacks(mount_id, callbacks);
            return Ok(());
        }

        if !rich::library_available() {
            tracing::warn!(mount_id, "rich editor library not loaded, staying in plain mode");
            if surface.is_empty() {
                surface.set_content(initial_content);
            }
            return configure_plain(mount_id, surface, callbacks);
        }

        // Edits already made on the raw surface win over the supplied
        // initial content. The surface itself stays untouched until the
        // attach has succeeded.
        let existing = surface.content();
        let preserved = if existing.is_empty() {
            initial_content.to_string()
        } else {
            existing
        };

        ensure_global_commands()?;
        let editor = RichEditor::attach(mount_id, surface.element())?;
        editor.set_content(&preserved);
        let rich_keys = install_rich_save_chord(&editor, mount_id);

        registry::insert(
            mount_id,
            MountState {
                backend: Backend::Rich(editor),
                callbacks,
                key_listener: None,
                rich_keys: Some(rich_keys),
            },
        );
        Ok(())
    } else {
        if let Some(editor) = attached_rich {
            // Flush back into the raw surface before disposal; skipping
            // the flush loses the buffer. The flushed value is
            // authoritative even when empty, so no seeding on this path.
            editor.flush();
            editor.dispose();
            registry::remove(mount_id);
            tracing::debug!(mount_id, "rich editor disposed, reverting to plain surface");
        } else if surface.is_empty() {
            surface.set_content(initial_content);
        }
        configure_plain(mount_id, surface, callbacks)
    }
}

/// Bind the plain surface: install the save chord, register callbacks.
fn configure_plain(
    mount_id: &str,
    surface: PlainSurface,
    callbacks: IntentCallbacks,
) -> Result<(), AdapterError> {
    // Inserting replaces any previous state, dropping its listener, so
    // redundant configure calls never stack save-chord handlers.
    let key_listener = install_plain_save_chord(&surface, mount_id);
    registry::insert(
        mount_id,
        MountState {
            backend: Backend::Plain(surface),
            callbacks,
            key_listener: Some(key_listener),
            rich_keys: None,
        },
    );
    Ok(())
}

/// Keydown listener for the Ctrl/Cmd+S chord on the raw surface.
fn install_plain_save_chord(surface: &PlainSurface, mount_id: &str) -> EventListener {
    let mount_id = mount_id.to_string();
    EventListener::new(surface.element(), "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if (event.ctrl_key() || event.meta_key()) && event.key() == "s" {
            event.prevent_default();
            registry::fire_save(&mount_id);
        }
    })
}

/// Ctrl+S binding on a rich instance. The handler routes through the
/// registry at fire time, so later callback replacement still wins.
fn install_rich_save_chord(editor: &RichEditor, mount_id: &str) -> Closure<dyn FnMut(JsValue)> {
    let mount_id = mount_id.to_string();
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |_instance: JsValue| {
        registry::fire_save(&mount_id);
    });
    let keys = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&keys, &JsValue::from_str("Ctrl-S"), handler.as_ref());
    editor.set_extra_keys(&keys);
    handler
}

thread_local! {
    static COMMANDS_DEFINED: Cell<bool> = const { Cell::new(false) };
    // Handlers for the globally defined commands live for the page.
    static COMMAND_HANDLERS: RefCell<Vec<Closure<dyn FnMut(JsValue)>>> =
        const { RefCell::new(Vec::new()) };
}

/// Define the save/quit ex-commands once per backend family.
///
/// The handlers read the mount tag off the firing instance and look up
/// that mount's callbacks at fire time.
fn ensure_global_commands() -> Result<(), AdapterError> {
    if COMMANDS_DEFINED.get() {
        return Ok(());
    }

    let write = Closure::<dyn FnMut(JsValue)>::new(|instance: JsValue| {
        if let Some(mount_id) = rich::mount_tag(&instance) {
            registry::fire_save(&mount_id);
        }
    });
    rich::define_ex_command("write", "w", write.as_ref().unchecked_ref())?;

    let quit = Closure::<dyn FnMut(JsValue)>::new(|instance: JsValue| {
        if let Some(mount_id) = rich::mount_tag(&instance) {
            registry::fire_quit(&mount_id);
        }
    });
    rich::define_ex_command("quit", "q", quit.as_ref().unchecked_ref())?;

    COMMAND_HANDLERS.with(|h| h.borrow_mut().extend([write, quit]));
    COMMANDS_DEFINED.set(true);
    Ok(())
}

// === Command router ===

/// Live content of whichever backend is active.
///
/// Falls back to the raw surface for a mount that exists but was never
/// configured; returns an empty string for a missing mount.
pub fn get_content(mount_id: &str) -> String {
    if let Some(backend) = registry::backend(mount_id) {
        return backend.content();
    }
    PlainSurface::find(mount_id)
        .map(|s| s.content())
        .unwrap_or_default()
}

/// Replace the whole buffer of whichever backend is active.
pub fn set_content(mount_id: &str, text: &str) {
    with_backend(mount_id, |backend| backend.set_content(text));
}

/// Wrap the current selection in `prefix`/`suffix`, or insert the pair
/// around a collapsed cursor.
pub fn wrap_selection(mount_id: &str, prefix: &str, suffix: &str) {
    with_backend(mount_id, |backend| {
        let content = backend.content();
        let edit = edit::wrap_selection(&content, backend.selection(), prefix, suffix);
        backend.apply_edit(&edit);
        backend.focus();
    });
}

/// Replace the current selection (or insert at the cursor) with `text`.
pub fn insert_text_at_cursor(mount_id: &str, text: &str) {
    with_backend(mount_id, |backend| {
        let content = backend.content();
        let edit = edit::insert_text(&content, backend.selection(), text);
        backend.apply_edit(&edit);
        backend.focus();
    });
}

/// Toggle the heading marker on the cursor's line.
pub fn toggle_heading(mount_id: &str, level: usize) {
    with_backend(mount_id, |backend| {
        let content = backend.content();
        let cursor = backend.selection().normalize().start;
        let edit = edit::toggle_heading(&content, cursor, level);
        backend.apply_edit(&edit);
        backend.focus();
    });
}

/// Run a command against the bound backend, falling back to the raw
/// surface for an unconfigured mount. Missing mount: no-op.
fn with_backend(mount_id: &str, f: impl FnOnce(&Backend)) {
    if let Some(backend) = registry::backend(mount_id) {
        f(&backend);
        return;
    }
    match PlainSurface::find(mount_id) {
        Some(surface) => f(&Backend::Plain(surface)),
        None => tracing::debug!(mount_id, "mount point not found, ignoring command"),
    }
}
