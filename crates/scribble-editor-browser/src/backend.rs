//! Backend dispatch.
//!
//! Exactly one of the two variants is live per mount point at any time.
//! Both expose the same primitive set, so the command router and the
//! pure edit algorithms never care which one they are driving.

use scribble_editor_core::{Range, TextEdit};

use crate::rich::RichEditor;
use crate::surface::PlainSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Rich,
    Plain,
}

/// The concrete editing object currently bound to a mount point.
#[derive(Clone)]
pub enum Backend {
    Rich(RichEditor),
    Plain(PlainSurface),
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Rich(_) => BackendKind::Rich,
            Self::Plain(_) => BackendKind::Plain,
        }
    }

    /// Live content snapshot.
    pub fn content(&self) -> String {
        match self {
            Self::Rich(editor) => editor.content(),
            Self::Plain(surface) => surface.content(),
        }
    }

    pub fn set_content(&self, text: &str) {
        match self {
            Self::Rich(editor) => editor.set_content(text),
            Self::Plain(surface) => surface.set_content(text),
        }
    }

    /// Current selection (or collapsed cursor) in char offsets.
    pub fn selection(&self) -> Range {
        match self {
            Self::Rich(editor) => editor.selection(),
            Self::Plain(surface) => surface.selection(),
        }
    }

    /// Apply a computed edit and restore the selection from it.
    pub fn apply_edit(&self, edit: &TextEdit) {
        match self {
            Self::Rich(editor) => editor.apply_edit(edit),
            Self::Plain(surface) => surface.apply_edit(edit),
        }
    }

    pub fn focus(&self) {
        match self {
            Self::Rich(editor) => editor.focus(),
            Self::Plain(surface) => surface.focus(),
        }
    }
}
