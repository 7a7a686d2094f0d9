//! Line content selection.

use crate::grapheme::{GraphemeLine, display_column};
use crate::types::Selection;

/// Trim the selection to the non-whitespace content of its lines.
///
/// `start` moves to the first non-space character of `start_line` and `end`
/// to just past the last non-space character of `end_line`. An all-space line
/// yields a zero-width span at its end. Line numbers are left alone.
pub fn select_content(
    selection: &mut Selection,
    start_line: &GraphemeLine<'_>,
    end_line: &GraphemeLine<'_>,
) {
    let start = start_line.leading_spaces();
    selection.start.col = display_column(start_line, start) as u32;

    let end = match end_line.len() - end_line.trailing_spaces() {
        0 => end_line.len(),
        content => content,
    };
    selection.end.col = display_column(end_line, end) as u32;
}
