//! Character-offset ranges for cursor and selection state.

/// A range in the buffer, measured in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed range (cursor with no selection).
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize range so start <= end.
    pub fn normalize(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Clamp both endpoints to `max`.
    pub fn clamp(self, max: usize) -> Self {
        Self {
            start: self.start.min(max),
            end: self.end.min(max),
        }
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(r: Range) -> Self {
        r.start..r.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret() {
        let r = Range::caret(4);
        assert!(r.is_caret());
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Range::new(7, 3).normalize(), Range::new(3, 7));
        assert_eq!(Range::new(3, 7).normalize(), Range::new(3, 7));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Range::new(2, 99).clamp(10), Range::new(2, 10));
        assert_eq!(Range::new(20, 99).clamp(10), Range::new(10, 10));
    }
}
