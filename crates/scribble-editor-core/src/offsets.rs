//! Offset conversion between chars, bytes, and UTF-16 code units.
//!
//! The edit algorithms work in char offsets, but both browser backends
//! report positions in UTF-16 code units (textarea `selectionStart`, the
//! rich editor's flat index). These helpers do the conversion at the call
//! boundary. All conversions clamp out-of-range input to the text length;
//! a UTF-16 offset landing inside a surrogate pair snaps past the
//! containing char.

use crate::range::Range;

/// Length in chars (Unicode scalar values).
pub fn len_chars(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset to a byte offset, clamping to the text length.
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Convert a byte offset to a char offset.
///
/// The offset must lie on a char boundary; offsets past the end clamp.
pub fn byte_to_char(text: &str, byte_offset: usize) -> usize {
    text.char_indices()
        .take_while(|(i, _)| *i < byte_offset)
        .count()
}

/// Convert a char offset to a UTF-16 code-unit offset.
pub fn char_to_utf16(text: &str, char_offset: usize) -> usize {
    text.chars()
        .take(char_offset)
        .map(|c| c.len_utf16())
        .sum()
}

/// Convert a UTF-16 code-unit offset to a char offset.
pub fn utf16_to_char(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (i, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return i;
        }
        units += c.len_utf16();
    }
    len_chars(text)
}

/// Slice the text by a char range.
pub fn char_slice(text: &str, range: Range) -> &str {
    let range = range.normalize();
    let start = char_to_byte(text, range.start);
    let end = char_to_byte(text, range.end);
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_byte_roundtrip() {
        let text = "héllo wörld"; // 'é' and 'ö' are 2 bytes each

        assert_eq!(char_to_byte(text, 0), 0);
        assert_eq!(char_to_byte(text, 1), 1);
        assert_eq!(char_to_byte(text, 2), 3); // after 'é'
        assert_eq!(char_to_byte(text, 99), text.len());

        assert_eq!(byte_to_char(text, 3), 2);
        assert_eq!(byte_to_char(text, text.len()), 11);
    }

    #[test]
    fn test_utf16_ascii_is_identity() {
        let text = "hello";
        for i in 0..=5 {
            assert_eq!(char_to_utf16(text, i), i);
            assert_eq!(utf16_to_char(text, i), i);
        }
    }

    #[test]
    fn test_utf16_surrogate_pairs() {
        let text = "a😀b"; // '😀' is one char, two UTF-16 units

        assert_eq!(char_to_utf16(text, 1), 1);
        assert_eq!(char_to_utf16(text, 2), 3);
        assert_eq!(char_to_utf16(text, 3), 4);

        assert_eq!(utf16_to_char(text, 1), 1);
        assert_eq!(utf16_to_char(text, 3), 2);
        // Mid-surrogate snaps past the char.
        assert_eq!(utf16_to_char(text, 2), 2);
        assert_eq!(utf16_to_char(text, 99), 3);
    }

    #[test]
    fn test_char_slice() {
        let text = "héllo wörld";
        assert_eq!(char_slice(text, Range::new(6, 11)), "wörld");
        // Reversed ranges normalize.
        assert_eq!(char_slice(text, Range::new(5, 0)), "héllo");
    }
}
