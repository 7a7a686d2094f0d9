//! Line splicing commands.

use crate::error::Abort;
use crate::grapheme::GraphemeLine;
use crate::traits::LineBuffer;
use crate::types::{Position, Selection};

/// Duplicate lines `start.line..=end.line` directly above themselves.
///
/// The block keeps its order, so the selection now covers the copies.
pub fn duplicate_lines<B: LineBuffer + ?Sized>(
    buffer: &mut B,
    selection: &Selection,
) -> Result<(), Abort> {
    let (first, last) = (selection.start.line, selection.end.line);
    let count = buffer.line_count();
    if last >= count {
        return Err(Abort::LineOutOfRange { line: last, count });
    }

    for index in first..=last {
        // Copies already inserted push the originals down by `index - first`.
        let source = index + (index - first);
        let text = buffer.line(source).ok_or(Abort::LineOutOfRange {
            line: source,
            count: buffer.line_count(),
        })?;
        buffer.insert_line(index, text);
    }
    Ok(())
}

/// Leading whitespace of `text`.
pub fn indentation(text: &str) -> &str {
    let line = GraphemeLine::new(text);
    let width: usize = line.graphemes()[..line.leading_spaces()]
        .iter()
        .map(|g| g.len())
        .sum();
    &text[..width]
}

/// Open a line after `end.line` carrying the indentation of `start.line` and
/// park a caret at the end of that indentation.
pub fn insert_indented_line<B: LineBuffer + ?Sized>(
    buffer: &mut B,
    selection: &mut Selection,
) -> Result<(), Abort> {
    let count = buffer.line_count();
    let start_text = buffer.line(selection.start.line).ok_or(Abort::LineOutOfRange {
        line: selection.start.line,
        count,
    })?;
    let padding = indentation(&start_text);
    let width = GraphemeLine::new(padding).len() as u32;

    let at = selection.end.line + 1;
    buffer.insert_line(at, padding.to_string());
    selection.collapse_to(Position::new(at, width));
    Ok(())
}
