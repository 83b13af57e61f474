//! Jump to the next marker line in AL source (`dataitem(`, `trigger OnAfterGetRecord(`).

use serde::Serialize;

use crate::types::{
    SourcePosition,
    SourceRange,
    utf16_len,
};

/// Line the caret moves to when no marker follows the cursor.
pub const FALLBACK_LINE: usize = 1;

/// Lines revealed above and below the destination.
pub const REVEAL_MARGIN: u32 = 10;

/// Line prefixes that can be jumped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    DataItem,
    OnAfterGetRecord,
    Keys,
    Trigger,
}

impl Marker {
    /// The upper-case prefix a destination line starts with.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::DataItem => "DATAITEM(",
            Self::OnAfterGetRecord => "TRIGGER ONAFTERGETRECORD(",
            Self::Keys => "KEYS",
            Self::Trigger => "TRIGGER ON",
        }
    }

    /// Whether `line` starts with this marker, ignoring case and indentation.
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        let marker = self.text();
        let upper = line.trim_start().to_uppercase();
        let prefix: String = upper.chars().take(marker.chars().count()).collect();
        prefix.contains(marker)
    }
}

/// Index of the first line after `cursor_line` that starts with `marker`,
/// or [`FALLBACK_LINE`] when there is none.
#[must_use]
pub fn find_next_marker(lines: &[&str], cursor_line: usize, marker: Marker) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(cursor_line.saturating_add(1))
        .find(|(_, line)| marker.matches(line))
        .map_or(FALLBACK_LINE, |(index, _)| index)
}

/// Where the caret goes and which lines the editor should bring into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JumpTarget {
    /// Empty selection at the end of the destination line.
    pub caret: SourceRange,
    /// Window of lines around the destination.
    pub reveal: SourceRange,
}

/// Computes the jump from `cursor_line` to the next `marker` line in `text`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // documents never exceed u32::MAX lines
pub fn jump_target(text: &str, cursor_line: u32, marker: Marker) -> JumpTarget {
    let lines: Vec<&str> = text.lines().collect();
    let last_line = lines.len().saturating_sub(1);
    let destination = find_next_marker(&lines, cursor_line as usize, marker).min(last_line);
    let end_character = lines.get(destination).map_or(0, |line| utf16_len(line));

    let line = destination as u32;
    let caret = SourceRange::caret(SourcePosition { line, character: end_character });
    let reveal = SourceRange {
        start: SourcePosition { line: line.saturating_sub(REVEAL_MARGIN), character: 0 },
        end: SourcePosition {
            line: line.saturating_add(REVEAL_MARGIN).min(last_line as u32),
            character: 0,
        },
    };

    JumpTarget { caret, reveal }
}
