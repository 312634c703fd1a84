//! Line boundary helpers.
//!
//! Line boundaries are the previous newline (exclusive) to the next
//! newline (exclusive), or the buffer edges. Offsets are char offsets.

use crate::offsets::{byte_to_char, char_to_byte, len_chars};

/// Find start of the line containing `offset`.
pub fn find_line_start(text: &str, offset: usize) -> usize {
    let byte = char_to_byte(text, offset);
    match text[..byte].rfind('\n') {
        Some(nl) => byte_to_char(text, nl + 1),
        None => 0,
    }
}

/// Find end of the line containing `offset` (position of the newline, or
/// end of text).
pub fn find_line_end(text: &str, offset: usize) -> usize {
    let byte = char_to_byte(text, offset);
    match text[byte..].find('\n') {
        Some(nl) => byte_to_char(text, byte + nl),
        None => len_chars(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_line_start() {
        let text = "hello\nworld\ntest";

        assert_eq!(find_line_start(text, 0), 0);
        assert_eq!(find_line_start(text, 3), 0);
        assert_eq!(find_line_start(text, 5), 0); // at newline
        assert_eq!(find_line_start(text, 6), 6); // start of "world"
        assert_eq!(find_line_start(text, 8), 6);
        assert_eq!(find_line_start(text, 12), 12); // start of "test"
    }

    #[test]
    fn test_find_line_end() {
        let text = "hello\nworld\ntest";

        assert_eq!(find_line_end(text, 0), 5);
        assert_eq!(find_line_end(text, 3), 5);
        assert_eq!(find_line_end(text, 6), 11);
        assert_eq!(find_line_end(text, 12), 16);
    }

    #[test]
    fn test_single_line() {
        let text = "no newlines here";
        assert_eq!(find_line_start(text, 7), 0);
        assert_eq!(find_line_end(text, 7), 16);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(find_line_start("", 0), 0);
        assert_eq!(find_line_end("", 0), 0);
    }

    #[test]
    fn test_multibyte_chars() {
        let text = "héllo\nwörld";
        assert_eq!(find_line_start(text, 8), 6);
        assert_eq!(find_line_end(text, 8), 11);
    }
}
