//! The selection-wrap, insert, and heading-toggle edit algorithms.
//!
//! Each algorithm is a pure function over `(full text, selection)` and
//! returns a [`TextEdit`]: the char range to replace, the replacement
//! text, and the selection after the edit. Backends apply the edit with
//! their native replace primitive and restore the selection from it, so
//! the algorithms behave identically regardless of backend.

use crate::offsets::{char_slice, len_chars};
use crate::range::Range;
use crate::text_helpers::{find_line_end, find_line_start};

/// A computed edit against a text snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Char range in the original text to replace.
    pub replaced: Range,
    /// Replacement text.
    pub insert: String,
    /// Selection after the edit, in char offsets of the post-edit text.
    /// Collapsed when the edit leaves a bare cursor.
    pub selection: Range,
}

impl TextEdit {
    /// Apply the edit to the text it was computed against.
    pub fn apply(&self, text: &str) -> String {
        let before = char_slice(text, Range::new(0, self.replaced.start));
        let after = char_slice(text, Range::new(self.replaced.end, len_chars(text)));
        let mut out = String::with_capacity(before.len() + self.insert.len() + after.len());
        out.push_str(before);
        out.push_str(&self.insert);
        out.push_str(after);
        out
    }
}

/// Wrap the selection in `prefix` and `suffix`.
///
/// With a non-empty selection the selected text is replaced by
/// `prefix + selected + suffix` and the whole replacement is left
/// selected. With a collapsed cursor, `prefix + suffix` is inserted and
/// the cursor placed between the two fragments.
pub fn wrap_selection(text: &str, selection: Range, prefix: &str, suffix: &str) -> TextEdit {
    let sel = selection.normalize().clamp(len_chars(text));

    if sel.is_caret() {
        let insert = format!("{prefix}{suffix}");
        return TextEdit {
            replaced: sel,
            insert,
            selection: Range::caret(sel.start + len_chars(prefix)),
        };
    }

    let selected = char_slice(text, sel);
    let insert = format!("{prefix}{selected}{suffix}");
    let inserted_len = len_chars(&insert);
    TextEdit {
        replaced: sel,
        insert,
        selection: Range::new(sel.start, sel.start + inserted_len),
    }
}

/// Replace the selection (or insert at a collapsed cursor) with `insert`,
/// leaving the cursor immediately after the inserted text.
pub fn insert_text(text: &str, selection: Range, insert: &str) -> TextEdit {
    let sel = selection.normalize().clamp(len_chars(text));
    TextEdit {
        replaced: sel,
        insert: insert.to_string(),
        selection: Range::caret(sel.start + len_chars(insert)),
    }
}

/// Toggle a markdown heading marker on the line containing `cursor`.
///
/// The marker is `level` repetitions of `#` followed by one space. If the
/// line has no leading marker, the marker is inserted at line start; if it
/// has exactly the target marker, the marker is removed; otherwise the
/// existing marker is replaced with the target one.
///
/// The cursor keeps its position relative to the line text: it shifts by
/// the marker length delta when it sat at or after the end of the replaced
/// prefix, lands right after the new marker when it sat inside it, and is
/// clamped to the new line end.
pub fn toggle_heading(text: &str, cursor: usize, level: usize) -> TextEdit {
    let level = level.max(1);
    let cursor = cursor.min(len_chars(text));

    let line_start = find_line_start(text, cursor);
    let line_end = find_line_end(text, cursor);
    let line = char_slice(text, Range::new(line_start, line_end));

    let marker = format!("{} ", "#".repeat(level));
    let existing = leading_marker_len(line);

    let (replaced_len, insert) = match existing {
        0 => (0, marker),
        n if char_slice(line, Range::new(0, n)) == marker => (n, String::new()),
        n => (n, marker),
    };
    tracing::trace!(level, replaced_len, "toggling heading marker");

    let added = len_chars(&insert);
    let new_cursor = if cursor < line_start + replaced_len {
        line_start + added
    } else {
        cursor - replaced_len + added
    };
    let new_line_end = line_end - replaced_len + added;

    TextEdit {
        replaced: Range::new(line_start, line_start + replaced_len),
        insert,
        selection: Range::caret(new_cursor.min(new_line_end)),
    }
}

/// Length of a leading heading marker: one or more `#` followed by one
/// space at position 0, or 0 if the line has none.
fn leading_marker_len(line: &str) -> usize {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes > 0 && line.chars().nth(hashes) == Some(' ') {
        hashes + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(text: &str, edit: &TextEdit) -> String {
        edit.apply(text)
    }

    // === wrap_selection ===

    #[test]
    fn test_wrap_with_selection() {
        let text = "hello world";
        let edit = wrap_selection(text, Range::new(6, 11), "**", "**");

        assert_eq!(applied(text, &edit), "hello **world**");
        // The whole replacement stays selected.
        assert_eq!(edit.selection, Range::new(6, 15));
    }

    #[test]
    fn test_wrap_with_reversed_selection() {
        let text = "hello world";
        let edit = wrap_selection(text, Range::new(11, 6), "_", "_");

        assert_eq!(applied(text, &edit), "hello _world_");
        assert_eq!(edit.selection, Range::new(6, 13));
    }

    #[test]
    fn test_wrap_without_selection() {
        let text = "hello ";
        let edit = wrap_selection(text, Range::caret(6), "[", "]");

        assert_eq!(applied(text, &edit), "hello []");
        // Cursor lands between the two fragments.
        assert_eq!(edit.selection, Range::caret(7));
    }

    #[test]
    fn test_wrap_multibyte_selection() {
        let text = "see 日本語 here";
        let edit = wrap_selection(text, Range::new(4, 7), "**", "**");

        assert_eq!(applied(text, &edit), "see **日本語** here");
        assert_eq!(edit.selection, Range::new(4, 11));
    }

    #[test]
    fn test_wrap_clamps_out_of_range() {
        let text = "ab";
        let edit = wrap_selection(text, Range::new(1, 99), "(", ")");
        assert_eq!(applied(text, &edit), "a(b)");
    }

    // === insert_text ===

    #[test]
    fn test_insert_at_cursor() {
        let text = "hello world";
        let edit = insert_text(text, Range::caret(5), ",");

        assert_eq!(applied(text, &edit), "hello, world");
        assert_eq!(edit.selection, Range::caret(6));
    }

    #[test]
    fn test_insert_replaces_selection() {
        let text = "hello world";
        let edit = insert_text(text, Range::new(6, 11), "rust");

        assert_eq!(applied(text, &edit), "hello rust");
        assert_eq!(edit.selection, Range::caret(10));
    }

    // === toggle_heading ===

    #[test]
    fn test_heading_added() {
        let edit = toggle_heading("Title", 0, 2);
        assert_eq!(applied("Title", &edit), "## Title");
    }

    #[test]
    fn test_heading_removed() {
        let edit = toggle_heading("# Title", 0, 1);
        assert_eq!(applied("# Title", &edit), "Title");
    }

    #[test]
    fn test_heading_level_changed() {
        let edit = toggle_heading("# Title", 0, 3);
        assert_eq!(applied("# Title", &edit), "### Title");
    }

    #[test]
    fn test_heading_on_middle_line() {
        let text = "intro\nTitle\noutro";
        let edit = toggle_heading(text, 8, 1);
        assert_eq!(applied(text, &edit), "intro\n# Title\noutro");
    }

    #[test]
    fn test_heading_last_line_no_trailing_newline() {
        let text = "intro\n## End";
        let edit = toggle_heading(text, 10, 2);
        assert_eq!(applied(text, &edit), "intro\nEnd");
    }

    #[test]
    fn test_hash_without_space_is_not_a_marker() {
        let edit = toggle_heading("#tag line", 0, 1);
        assert_eq!(applied("#tag line", &edit), "# #tag line");
    }

    #[test]
    fn test_heading_on_empty_line() {
        let text = "a\n\nb";
        let edit = toggle_heading(text, 2, 1);
        assert_eq!(applied(text, &edit), "a\n# \nb");
    }

    #[test]
    fn test_cursor_shifts_with_added_marker() {
        // "Ti|tle" -> "## Ti|tle"
        let edit = toggle_heading("Title", 2, 2);
        assert_eq!(edit.selection, Range::caret(5));
    }

    #[test]
    fn test_cursor_shifts_back_on_removal() {
        // "# Tit|le" -> "Tit|le"
        let edit = toggle_heading("# Title", 5, 1);
        assert_eq!(edit.selection, Range::caret(3));
    }

    #[test]
    fn test_cursor_inside_marker_lands_after_new_marker() {
        // "#| Title" -> "### |Title"
        let edit = toggle_heading("# Title", 1, 3);
        assert_eq!(edit.selection, Range::caret(4));
    }

    #[test]
    fn test_cursor_clamped_to_new_line_end() {
        // Cursor at end of "# x"; removal shortens the line.
        let edit = toggle_heading("# x", 3, 1);
        assert_eq!(applied("# x", &edit), "x");
        assert_eq!(edit.selection, Range::caret(1));
    }

    #[test]
    fn test_heading_cursor_stays_on_same_line() {
        let text = "one\ntwo\nthree";
        let edit = toggle_heading(text, 5, 1);
        assert_eq!(applied(text, &edit), "one\n# two\nthree");
        // Cursor still within the second line.
        assert!(edit.selection.start >= 4);
        assert!(edit.selection.start <= 9);
    }
}
