//! Line scanner: finds the nearest line holding a word above or below a line.
//!
//! Blank and whitespace-only lines, and lines made only of punctuation or
//! emoji, are skipped.

use crate::grapheme::{GraphemeLine, display_column};
use crate::traits::LineBuffer;
use crate::types::Position;

/// The line a scan settled on together with where the caret lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Index of the qualifying line.
    pub line: u32,
    /// Text of the qualifying line.
    pub text: String,
    /// Caret for the word scan that follows.
    pub position: Position,
}

/// Scan the lines strictly above `from_line`, nearest first.
///
/// On a match at line `i` the caret lands one line above it, `i - 1`
/// (saturating at line 0), on the column where the match's terminator sits.
pub fn previous_word_line<B: LineBuffer + ?Sized>(
    buffer: &B,
    from_line: u32,
) -> Option<LineMatch> {
    let from_line = from_line.min(buffer.line_count());
    (0..from_line).rev().find_map(|index| {
        let text = buffer.line(index)?;
        let line = GraphemeLine::new(&text);
        if !line.has_word() {
            return None;
        }
        let end = display_column(&line, line.len()) as u32;
        let position = Position::new(index.saturating_sub(1), end);
        Some(LineMatch {
            line: index,
            text,
            position,
        })
    })
}

/// Scan the lines strictly below `from_line`, nearest first.
///
/// On a match the caret lands at the start of the matching line.
pub fn next_word_line<B: LineBuffer + ?Sized>(
    buffer: &B,
    from_line: u32,
) -> Option<LineMatch> {
    let first = from_line.saturating_add(1);
    (first..buffer.line_count()).find_map(|index| {
        let text = buffer.line(index)?;
        if !GraphemeLine::new(&text).has_word() {
            return None;
        }
        Some(LineMatch {
            line: index,
            text,
            position: Position::new(index, 0),
        })
    })
}
