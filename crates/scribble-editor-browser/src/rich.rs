//! The rich editing backend: bindings to the modal editor library.
//!
//! The library (CodeMirror with its vim keymap) is loaded globally by the
//! host page; the adapter never bundles it. Bindings cover only the
//! primitives the command set needs. Flat indices on this API are UTF-16
//! code units, converted to char offsets at the call boundary like the
//! plain surface does.

use wasm_bindgen::prelude::*;
use web_sys::HtmlTextAreaElement;

use scribble_editor_core::{Range, TextEdit, char_to_utf16, utf16_to_char};

use crate::error::AdapterError;

/// Property the adapter sets on every instance it creates, so that the
/// globally defined commands can route back to the owning mount point.
pub const MOUNT_TAG: &str = "scribbleMount";

#[wasm_bindgen]
extern "C" {
    /// A live rich-editor instance bound to one mount point.
    #[derive(Clone)]
    pub type RichEditor;

    #[wasm_bindgen(js_namespace = CodeMirror, js_name = fromTextArea, catch)]
    fn from_text_area(
        textarea: &HtmlTextAreaElement,
        options: &JsValue,
    ) -> Result<RichEditor, JsValue>;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_value(this: &RichEditor) -> String;

    #[wasm_bindgen(method, js_name = setValue)]
    fn set_value(this: &RichEditor, value: &str);

    #[wasm_bindgen(method, js_name = setOption)]
    fn set_option(this: &RichEditor, option: &str, value: &JsValue);

    #[wasm_bindgen(method, js_name = getCursor)]
    fn get_cursor(this: &RichEditor, side: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = indexFromPos)]
    fn index_from_pos(this: &RichEditor, pos: &JsValue) -> u32;

    #[wasm_bindgen(method, js_name = posFromIndex)]
    fn pos_from_index(this: &RichEditor, index: u32) -> JsValue;

    #[wasm_bindgen(method, js_name = setSelection)]
    fn set_selection_pos(this: &RichEditor, anchor: &JsValue, head: &JsValue);

    #[wasm_bindgen(method, js_name = replaceRange)]
    fn replace_range_pos(this: &RichEditor, text: &str, from: &JsValue, to: &JsValue);

    #[wasm_bindgen(method)]
    pub fn focus(this: &RichEditor);

    /// Flush the editor's current content into the underlying textarea.
    #[wasm_bindgen(method)]
    fn save(this: &RichEditor);

    /// Detach from the textarea, reverting the mount to its raw form.
    #[wasm_bindgen(method, js_name = toTextArea)]
    fn to_text_area(this: &RichEditor);

    #[wasm_bindgen(js_namespace = ["CodeMirror", "Vim"], js_name = defineEx, catch)]
    fn define_ex(name: &str, prefix: &str, handler: &js_sys::Function) -> Result<(), JsValue>;
}

/// Whether the rich-editor library global is present on the page.
pub fn library_available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("CodeMirror"))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Define a global ex-command for the whole backend family.
///
/// The handler receives the firing instance; it must resolve the mount
/// through [`mount_tag`] at fire time rather than closing over state.
pub(crate) fn define_ex_command(
    name: &str,
    prefix: &str,
    handler: &js_sys::Function,
) -> Result<(), AdapterError> {
    define_ex(name, prefix, handler)?;
    Ok(())
}

/// Read the mount-point id tag off an editor instance.
pub fn mount_tag(instance: &JsValue) -> Option<String> {
    js_sys::Reflect::get(instance, &JsValue::from_str(MOUNT_TAG))
        .ok()?
        .as_string()
}

impl RichEditor {
    /// Create a rich editor over the mount point's textarea, tagged with
    /// the mount id for fire-time command routing.
    pub fn attach(mount_id: &str, textarea: &HtmlTextAreaElement) -> Result<Self, AdapterError> {
        if !library_available() {
            return Err(AdapterError::BackendUnavailable);
        }

        let options = js_sys::Object::new();
        let set = |key: &str, value: &JsValue| {
            let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), value);
        };
        set("mode", &JsValue::from_str("markdown"));
        set("keyMap", &JsValue::from_str("vim"));
        set("theme", &JsValue::from_str("default"));
        set("lineNumbers", &JsValue::TRUE);
        set("lineWrapping", &JsValue::TRUE);

        let editor = from_text_area(textarea, &options)?;
        js_sys::Reflect::set(
            &editor,
            &JsValue::from_str(MOUNT_TAG),
            &JsValue::from_str(mount_id),
        )?;
        tracing::debug!(mount_id, "rich editor attached");
        Ok(editor)
    }

    pub fn content(&self) -> String {
        self.get_value()
    }

    pub fn set_content(&self, text: &str) {
        self.set_value(text);
    }

    /// Current selection (or collapsed cursor) in char offsets.
    pub fn selection(&self) -> Range {
        let value = self.get_value();
        let from = self.index_from_pos(&self.get_cursor("from")) as usize;
        let to = self.index_from_pos(&self.get_cursor("to")) as usize;
        Range::new(utf16_to_char(&value, from), utf16_to_char(&value, to))
    }

    pub fn set_selection(&self, range: Range) {
        let value = self.get_value();
        let anchor = self.pos_from_index(char_to_utf16(&value, range.start) as u32);
        let head = self.pos_from_index(char_to_utf16(&value, range.end) as u32);
        self.set_selection_pos(&anchor, &head);
    }

    /// Apply a computed edit with the ranged replace primitive and restore
    /// the selection from it.
    pub fn apply_edit(&self, edit: &TextEdit) {
        let value = self.get_value();
        let from = self.pos_from_index(char_to_utf16(&value, edit.replaced.start) as u32);
        let to = self.pos_from_index(char_to_utf16(&value, edit.replaced.end) as u32);
        self.replace_range_pos(&edit.insert, &from, &to);
        self.set_selection(edit.selection);
    }

    /// Ensure the modal keymap is active (no-op if it already is).
    pub fn set_vim_keymap(&self) {
        self.set_option("keyMap", &JsValue::from_str("vim"));
    }

    pub fn set_extra_keys(&self, keys: &JsValue) {
        self.set_option("extraKeys", keys);
    }

    /// Flush content into the underlying textarea. Mandatory before
    /// [`dispose`](Self::dispose); skipping it loses the buffer.
    pub fn flush(&self) {
        self.save();
    }

    pub fn dispose(&self) {
        self.to_text_area();
    }
}
