//! scribble-editor-core: pure editing logic without browser dependencies.
//!
//! This crate provides:
//! - `Range` - character-offset ranges for cursor/selection state
//! - line boundary and offset conversion helpers
//! - the selection-wrap, insert, and heading-toggle algorithms shared by
//!   both editing backends
//!
//! All offsets are Unicode scalar values (chars), not bytes or UTF-16.
//! Backends convert their native cursor representation to char offsets at
//! the call boundary, which keeps the edit algorithms backend-independent
//! and separately testable.

pub mod edit;
pub mod offsets;
pub mod range;
pub mod text_helpers;

pub use edit::{TextEdit, insert_text, toggle_heading, wrap_selection};
pub use offsets::{char_slice, char_to_byte, char_to_utf16, len_chars, utf16_to_char};
pub use range::Range;
pub use text_helpers::{find_line_end, find_line_start};
