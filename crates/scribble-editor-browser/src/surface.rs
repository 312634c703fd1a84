//! The plain editing backend: a raw `<textarea>` surface.
//!
//! This is the DOM-native fallback that is always available. The browser
//! reports selection offsets in UTF-16 code units; conversion to char
//! offsets happens here, at the call boundary.

use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

use scribble_editor_core::{Range, TextEdit, char_to_utf16, len_chars, utf16_to_char};

/// The raw text-input surface bound to one mount point.
#[derive(Clone)]
pub struct PlainSurface {
    textarea: HtmlTextAreaElement,
}

impl PlainSurface {
    /// Look up the mount point's textarea by element id.
    pub fn find(mount_id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(mount_id)?;
        let textarea = element.dyn_into::<HtmlTextAreaElement>().ok()?;
        Some(Self { textarea })
    }

    pub fn element(&self) -> &HtmlTextAreaElement {
        &self.textarea
    }

    pub fn content(&self) -> String {
        self.textarea.value()
    }

    pub fn set_content(&self, text: &str) {
        self.textarea.set_value(text);
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.value().is_empty()
    }

    /// Current selection (or collapsed cursor) in char offsets.
    ///
    /// A surface that reports no selection yields a cursor at the end of
    /// the content.
    pub fn selection(&self) -> Range {
        let value = self.textarea.value();
        let end_of_text = len_chars(&value);
        let start = self
            .textarea
            .selection_start()
            .ok()
            .flatten()
            .map(|u| utf16_to_char(&value, u as usize))
            .unwrap_or(end_of_text);
        let end = self
            .textarea
            .selection_end()
            .ok()
            .flatten()
            .map(|u| utf16_to_char(&value, u as usize))
            .unwrap_or(end_of_text);
        Range::new(start, end)
    }

    pub fn set_selection(&self, range: Range) {
        let value = self.textarea.value();
        let start = char_to_utf16(&value, range.start) as u32;
        let end = char_to_utf16(&value, range.end) as u32;
        let _ = self.textarea.set_selection_range(start, end);
    }

    /// Apply a computed edit and restore the selection from it.
    pub fn apply_edit(&self, edit: &TextEdit) {
        let value = self.textarea.value();
        self.textarea.set_value(&edit.apply(&value));
        self.set_selection(edit.selection);
    }

    pub fn focus(&self) {
        let _ = self.textarea.focus();
    }
}
