use log::{debug, trace};

use crate::chars::grapheme_is_word;
use crate::content::select_content;
use crate::edit::{duplicate_lines, insert_indented_line};
use crate::error::Abort;
use crate::grapheme::{GraphemeLine, display_column, grapheme_index};
use crate::scan::{next_word_line, previous_word_line};
use crate::traits::LineBuffer;
use crate::types::{Command, CommandSet, Position, Selection};
use crate::word::{select_previous_word, select_word, select_word_vertically};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertical {
    Above,
    Below,
}

/// Dispatches host commands against a buffer and its active selection.
#[derive(Debug, Clone)]
pub struct Engine {
    commands: CommandSet,
}

pub struct EngineBuilder {
    commands: CommandSet,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            commands: CommandSet::all(),
        }
    }
}

impl EngineBuilder {
    /// Accept exactly `commands`.
    pub fn commands(mut self, commands: CommandSet) -> Self {
        self.commands = commands;
        self
    }

    pub fn enable(mut self, commands: CommandSet) -> Self {
        self.commands.insert(commands);
        self
    }

    pub fn disable(mut self, commands: CommandSet) -> Self {
        self.commands.remove(commands);
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            commands: self.commands,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn commands(&self) -> CommandSet {
        self.commands
    }

    pub fn is_enabled(&self, command: Command) -> bool {
        self.commands.contains(command.flag())
    }

    /// Run the command named by `identifier` the way a host extension would.
    ///
    /// Only the first selection is read. Its new value is written back to
    /// `selections[0]`; when a selection command finishes or stops after moving
    /// the selection, the list is reduced to that single selection. `completion` runs exactly once whatever
    /// happens, and no failure is reported to it.
    pub fn perform<B, F>(
        &self,
        identifier: &str,
        buffer: &mut B,
        selections: &mut Vec<Selection>,
        completion: F,
    ) where
        B: LineBuffer + ?Sized,
        F: FnOnce(),
    {
        match self.perform_inner(identifier, buffer, selections) {
            Ok(command) => trace!("{command} finished"),
            Err(abort) => debug!("{identifier}: stopped early: {abort}"),
        }
        completion();
    }

    fn perform_inner<B: LineBuffer + ?Sized>(
        &self,
        identifier: &str,
        buffer: &mut B,
        selections: &mut Vec<Selection>,
    ) -> Result<Command, Abort> {
        let command = Command::from_identifier(identifier)?;
        let first = selections.first_mut().ok_or(Abort::NoSelection)?;

        let before = *first;
        let result = self.execute(command, buffer, first);
        let moved = *first != before;
        if command.updates_selection() && (result.is_ok() || moved) {
            selections.truncate(1);
        }
        result.map(|()| command)
    }

    /// Run `command` against `selection`.
    ///
    /// An `Err` means a guard stopped the command; changes made before the
    /// guard are kept.
    pub fn execute<B: LineBuffer + ?Sized>(
        &self,
        command: Command,
        buffer: &mut B,
        selection: &mut Selection,
    ) -> Result<(), Abort> {
        if !self.is_enabled(command) {
            return Err(Abort::Disabled(command));
        }

        let current = line_at(buffer, selection.end.line)?;

        match command {
            Command::SelectCurrentWord | Command::SelectNextWord => {
                self.select_next(buffer, selection, &current)
            }
            Command::SelectPreviousWord => self.select_previous(buffer, selection, &current),
            Command::SelectWordAbove => {
                self.select_vertical(buffer, selection, &current, Vertical::Above)
            }
            Command::SelectWordBelow => {
                self.select_vertical(buffer, selection, &current, Vertical::Below)
            }
            Command::SelectLineContents => {
                let start_text = line_at(buffer, selection.start.line)?;
                select_content(
                    selection,
                    &GraphemeLine::new(&start_text),
                    &GraphemeLine::new(&current),
                );
                Ok(())
            }
            Command::DuplicateLine => duplicate_lines(buffer, selection),
            Command::MoveToEolAndInsertLf => insert_indented_line(buffer, selection),
            Command::JoinLine | Command::DeleteLine => Err(Abort::Unimplemented(command)),
        }
    }

    fn select_next<B: LineBuffer + ?Sized>(
        &self,
        buffer: &B,
        selection: &mut Selection,
        current: &str,
    ) -> Result<(), Abort> {
        let line = GraphemeLine::new(current);
        let rest_has_word = line
            .starting_at(grapheme_index(&line, selection.end.col as usize) + 1)
            .iter()
            .any(|g| grapheme_is_word(g));
        if rest_has_word {
            return select_word(selection, &line);
        }

        let Some(found) = next_word_line(buffer, selection.end.line) else {
            selection.collapse_to(buffer_end(buffer));
            return Err(Abort::NoWordLine);
        };
        selection.collapse_to(found.position);
        select_word(selection, &GraphemeLine::new(&found.text))
    }

    fn select_previous<B: LineBuffer + ?Sized>(
        &self,
        buffer: &B,
        selection: &mut Selection,
        current: &str,
    ) -> Result<(), Abort> {
        let line = GraphemeLine::new(current);
        let before_has_word = line
            .before(grapheme_index(&line, selection.start.col as usize))
            .iter()
            .any(|g| grapheme_is_word(g));
        if before_has_word {
            // The scan reads the end line.
            selection.start.line = selection.end.line;
            return select_previous_word(selection, &line);
        }

        let Some(found) = previous_word_line(buffer, selection.start.line) else {
            selection.collapse_to(Position::ZERO);
            return Err(Abort::NoWordLine);
        };
        // The word is taken from the matched line itself.
        selection.collapse_to(Position::new(found.line, found.position.col));
        select_previous_word(selection, &GraphemeLine::new(&found.text))
    }

    fn select_vertical<B: LineBuffer + ?Sized>(
        &self,
        buffer: &B,
        selection: &mut Selection,
        current: &str,
        direction: Vertical,
    ) -> Result<(), Abort> {
        let line = GraphemeLine::new(current);
        if selection.is_collapsed() {
            return select_word(selection, &line);
        }

        let from = selection.start.line;
        let target_line = match direction {
            Vertical::Above => from.checked_sub(1),
            Vertical::Below => from.checked_add(1),
        }
        .filter(|&l| l < buffer.line_count())
        .ok_or(Abort::NoAdjacentLine { line: from })?;

        let target = line_at(buffer, target_line)?;
        select_word_vertically(selection, &line, target_line, &GraphemeLine::new(&target))
    }
}

fn line_at<B: LineBuffer + ?Sized>(buffer: &B, line: u32) -> Result<String, Abort> {
    buffer.line(line).ok_or(Abort::LineOutOfRange {
        line,
        count: buffer.line_count(),
    })
}

// Caret after the last character of the last line.
fn buffer_end<B: LineBuffer + ?Sized>(buffer: &B) -> Position {
    let last = buffer.line_count().saturating_sub(1);
    let col = buffer
        .line(last)
        .map(|text| {
            let line = GraphemeLine::new(&text);
            display_column(&line, line.len())
        })
        .unwrap_or(0);
    Position::new(last, col as u32)
}
