//! Core types used throughout the project.

use serde::Serialize;
use tower_lsp::lsp_types;

/// A range in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl From<lsp_types::Range> for SourceRange {
    fn from(range: lsp_types::Range) -> Self {
        Self { start: range.start.into(), end: range.end.into() }
    }
}

impl From<SourceRange> for lsp_types::Range {
    fn from(range: SourceRange) -> Self {
        Self { start: range.start.into(), end: range.end.into() }
    }
}

impl Serialize for SourceRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        lsp_types::Range::from(*self).serialize(serializer)
    }
}

/// A position in a document (0-indexed, UTF-16 columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: u32,
    pub character: u32,
}

impl From<lsp_types::Position> for SourcePosition {
    fn from(position: lsp_types::Position) -> Self {
        Self { line: position.line, character: position.character }
    }
}

impl From<SourcePosition> for lsp_types::Position {
    fn from(position: SourcePosition) -> Self {
        Self { line: position.line, character: position.character }
    }
}

impl SourceRange {
    /// An empty range (a caret) at `position`.
    #[must_use]
    pub const fn caret(position: SourcePosition) -> Self {
        Self { start: position, end: position }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.line == self.end.line && self.start.character == self.end.character
    }

    /// Checks if a position is within this range.
    #[must_use]
    pub const fn contains(&self, position: SourcePosition) -> bool {
        if position.line < self.start.line {
            return false;
        }
        if position.line == self.start.line && position.character < self.start.character {
            return false;
        }
        if position.line > self.end.line {
            return false;
        }
        if position.line == self.end.line && position.character > self.end.character {
            return false;
        }
        true
    }

    /// Checks if `other` lies entirely within this range.
    #[must_use]
    pub const fn contains_range(&self, other: &Self) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }
}

/// Length of `text` in UTF-16 code units, the column unit LSP positions use.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // a single line never exceeds u32::MAX units
pub fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}

/// Converts a UTF-16 column into a byte offset within `line`, clamped to the line end.
#[must_use]
pub fn byte_offset(line: &str, character: u32) -> usize {
    let mut units = 0u32;
    for (offset, ch) in line.char_indices() {
        if units >= character {
            return offset;
        }
        #[allow(clippy::cast_possible_truncation)] // len_utf16 is 1 or 2
        {
            units += ch.len_utf16() as u32;
        }
    }
    line.len()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    const fn pos(line: u32, character: u32) -> SourcePosition {
        SourcePosition { line, character }
    }

    const fn range(start_line: u32, start_char: u32, end_line: u32, end_char: u32) -> SourceRange {
        SourceRange { start: pos(start_line, start_char), end: pos(end_line, end_char) }
    }

    #[rstest]
    #[case::before_start_line(pos(0, 5), range(1, 5, 2, 10), false)]
    #[case::before_start_char(pos(1, 4), range(1, 5, 2, 10), false)]
    #[case::at_start(pos(1, 5), range(1, 5, 2, 10), true)]
    #[case::middle_line(pos(1, 10), range(1, 5, 2, 10), true)]
    #[case::at_end(pos(2, 10), range(1, 5, 2, 10), true)]
    #[case::after_end_char(pos(2, 11), range(1, 5, 2, 10), false)]
    #[case::after_end_line(pos(3, 0), range(1, 5, 2, 10), false)]
    fn test_contains(
        #[case] position: SourcePosition,
        #[case] range: SourceRange,
        #[case] expected: bool,
    ) {
        assert_that!(range.contains(position), eq(expected));
    }

    #[rstest]
    #[case::inside(range(1, 6, 1, 8), true)]
    #[case::same(range(1, 5, 1, 10), true)]
    #[case::caret_inside(range(1, 7, 1, 7), true)]
    #[case::overlaps_end(range(1, 8, 1, 12), false)]
    #[case::before(range(0, 0, 0, 3), false)]
    fn test_contains_range(#[case] other: SourceRange, #[case] expected: bool) {
        assert_that!(range(1, 5, 1, 10).contains_range(&other), eq(expected));
    }

    #[rstest]
    #[case::ascii("abc", 2, 2)]
    #[case::past_end("abc", 10, 3)]
    #[case::multibyte("äbc", 1, 2)]
    #[case::surrogate_pair("😀x", 2, 4)]
    fn test_byte_offset(#[case] line: &str, #[case] character: u32, #[case] expected: usize) {
        assert_that!(byte_offset(line, character), eq(expected));
    }

    #[googletest::test]
    fn utf16_len_counts_code_units() {
        expect_that!(utf16_len("DataItem("), eq(9));
        expect_that!(utf16_len("😀"), eq(2));
    }
}
