//! Word boundary engine.
//!
//! All operations mutate the selection in place. Scans run over grapheme
//! clusters; resulting columns are shifted right by the extender scalars that
//! precede them so they line up with the host's columns.
//!
//! An operation that hits a guard returns an [`Abort`] and leaves whatever it
//! already changed in place.

use crate::chars::grapheme_is_word;
use crate::error::Abort;
use crate::grapheme::{GraphemeLine, display_column, grapheme_index};
use crate::types::{Position, Selection};

/// Select the word at or after the caret.
///
/// The decision is made on the character one past `end`. The line end counts
/// as a non-word terminator there; past it nothing changes. A non-collapsed
/// selection is first collapsed two columns past its end so a repeated call
/// moves on to the next word.
pub fn select_word(selection: &mut Selection, line: &GraphemeLine<'_>) -> Result<(), Abort> {
    let caret = grapheme_index(line, selection.end.col as usize);
    let probe = caret + 1;
    let next_is_word = match line.get(probe) {
        Some(next) => grapheme_is_word(next),
        None if probe == line.len() => false,
        None => {
            return Err(Abort::NoNextCharacter {
                col: selection.end.col,
            });
        }
    };

    let mut start = if selection.is_collapsed() { caret } else { caret + 2 };
    start = start.min(line.len());

    // Step one past the first word character at or after the caret.
    if !next_is_word {
        for grapheme in line.starting_at(start) {
            start += 1;
            if grapheme_is_word(grapheme) {
                break;
            }
        }
    }

    start -= line
        .before(start)
        .iter()
        .rev()
        .take_while(|g| grapheme_is_word(g))
        .count();
    let end = start
        + line
            .starting_at(start)
            .iter()
            .take_while(|g| grapheme_is_word(g))
            .count();

    let row = selection.end.line;
    selection.start = Position::new(row, display_column(line, start) as u32);
    selection.end = Position::new(row, display_column(line, end) as u32);
    Ok(())
}

// Moves the caret onto the last character of the preceding word, or to
// column 0 when no word precedes it.
fn step_back(selection: &mut Selection, line: &GraphemeLine<'_>) -> Result<(), Abort> {
    let index = grapheme_index(line, selection.start.col as usize);
    let previous = index
        .checked_sub(1)
        .and_then(|i| line.get(i))
        .ok_or(Abort::NoPreviousCharacter {
            col: selection.start.col,
        })?;

    let mut start = index - 1;
    if !grapheme_is_word(previous) {
        for grapheme in line.before(start).iter().rev() {
            start -= 1;
            if grapheme_is_word(grapheme) {
                break;
            }
        }
    }

    let col = display_column(line, start) as u32;
    selection.collapse_to(Position::new(selection.start.line, col));
    Ok(())
}

/// Collapse the selection to a caret on the end of the preceding word.
pub fn collapse_to_preceding_word(
    selection: &mut Selection,
    line: &GraphemeLine<'_>,
) -> Result<(), Abort> {
    step_back(selection, line)
}

/// Collapse onto the preceding word and then select all of it.
pub fn select_previous_word(
    selection: &mut Selection,
    line: &GraphemeLine<'_>,
) -> Result<(), Abort> {
    step_back(selection, line)?;
    select_word(selection, line)
}

/// Move a selection to the proportional column of `target` and snap it to the
/// nearest word there.
///
/// The column is `target.len() * start.col / current.len()`, rounded down and
/// counted in clusters on both lines. An empty `current` line leaves the
/// selection untouched.
pub fn select_word_vertically(
    selection: &mut Selection,
    current: &GraphemeLine<'_>,
    target_line: u32,
    target: &GraphemeLine<'_>,
) -> Result<(), Abort> {
    if current.is_empty() {
        return Err(Abort::EmptyLine {
            line: selection.end.line,
        });
    }

    let from = grapheme_index(current, selection.start.col as usize).min(current.len());
    let index = (target.len() as u64 * from as u64 / current.len() as u64) as usize;
    let col = display_column(target, index) as u32;
    selection.collapse_to(Position::new(target_line, col));
    select_previous_word(selection, target)
}
