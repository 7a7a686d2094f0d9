use std::fmt;
use std::str::FromStr;

use crate::error::ParseCommandError;

/// A position within a line buffer.
///
/// Positions are zero-indexed. Columns address grapheme clusters, and a column
/// equal to the line length places the caret after the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column.
    pub col: u32,
}

impl Position {
    /// The origin position (0, 0).
    pub const ZERO: Position = Position { line: 0, col: 0 };

    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// The active selection handed over by the host.
///
/// `start` is not required to precede `end` while a command is running; some
/// commands move `end` first and reconcile `start` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// The start of the selection.
    pub start: Position,
    /// The end of the selection.
    pub end: Position,
}

impl Selection {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A collapsed selection (a caret) at `pos`.
    pub const fn caret(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// A selection on a single line spanning `start_col..end_col`.
    pub const fn on_line(line: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(line, start_col),
            end: Position::new(line, end_col),
        }
    }

    /// True when nothing is highlighted.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Move both ends to `pos`.
    pub fn collapse_to(&mut self, pos: Position) {
        self.start = pos;
        self.end = pos;
    }
}

/// Commands a host can dispatch to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Command {
    /// Select the word under or after the caret.
    SelectCurrentWord,
    /// Select the word following the current selection.
    SelectNextWord,
    /// Select the word preceding the current selection.
    SelectPreviousWord,
    /// Select the word at the proportional column on the line above.
    SelectWordAbove,
    /// Select the word at the proportional column on the line below.
    SelectWordBelow,
    /// Trim the selection to the non-whitespace content of its lines.
    SelectLineContents,
    /// Reserved for the host; completes without doing anything.
    JoinLine,
    /// Duplicate the selected line range directly above itself.
    DuplicateLine,
    /// Reserved for the host; completes without doing anything.
    DeleteLine,
    /// Open an indented line below the selection and move the caret there.
    #[cfg_attr(feature = "serde", serde(rename = "moveToEOLandInsertLF"))]
    MoveToEolAndInsertLf,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::SelectCurrentWord,
        Command::SelectNextWord,
        Command::SelectPreviousWord,
        Command::SelectWordAbove,
        Command::SelectWordBelow,
        Command::SelectLineContents,
        Command::JoinLine,
        Command::DuplicateLine,
        Command::DeleteLine,
        Command::MoveToEolAndInsertLf,
    ];

    /// The bare command name as hosts register it.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::SelectCurrentWord => "selectCurrentWord",
            Command::SelectNextWord => "selectNextWord",
            Command::SelectPreviousWord => "selectPreviousWord",
            Command::SelectWordAbove => "selectWordAbove",
            Command::SelectWordBelow => "selectWordBelow",
            Command::SelectLineContents => "selectLineContents",
            Command::JoinLine => "joinLine",
            Command::DuplicateLine => "duplicateLine",
            Command::DeleteLine => "deleteLine",
            Command::MoveToEolAndInsertLf => "moveToEOLandInsertLF",
        }
    }

    /// Parse a possibly namespaced identifier such as
    /// `com.example.Marvin.selectNextWord`. Only the last dot-separated
    /// component is significant.
    pub fn from_identifier(identifier: &str) -> Result<Self, ParseCommandError> {
        let name = identifier.rsplit('.').next().unwrap_or(identifier);
        name.parse()
    }

    /// Whether the host should replace its selections after this command.
    pub fn updates_selection(self) -> bool {
        !matches!(
            self,
            Command::DuplicateLine | Command::DeleteLine | Command::JoinLine
        )
    }

    /// The flag enabling this command in a [`CommandSet`].
    pub fn flag(self) -> CommandSet {
        match self {
            Command::SelectCurrentWord => CommandSet::SELECT_CURRENT_WORD,
            Command::SelectNextWord => CommandSet::SELECT_NEXT_WORD,
            Command::SelectPreviousWord => CommandSet::SELECT_PREVIOUS_WORD,
            Command::SelectWordAbove => CommandSet::SELECT_WORD_ABOVE,
            Command::SelectWordBelow => CommandSet::SELECT_WORD_BELOW,
            Command::SelectLineContents => CommandSet::SELECT_LINE_CONTENTS,
            Command::JoinLine => CommandSet::JOIN_LINE,
            Command::DuplicateLine => CommandSet::DUPLICATE_LINE,
            Command::DeleteLine => CommandSet::DELETE_LINE,
            Command::MoveToEolAndInsertLf => CommandSet::MOVE_TO_EOL_AND_INSERT_LF,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| ParseCommandError::Unknown(s.to_string()))
    }
}

bitflags::bitflags! {
    /// The set of commands an engine accepts.
    ///
    /// Commands outside the set complete as no-ops.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CommandSet: u16 {
        const SELECT_CURRENT_WORD       = 1 << 0;
        const SELECT_NEXT_WORD          = 1 << 1;
        const SELECT_PREVIOUS_WORD      = 1 << 2;
        const SELECT_WORD_ABOVE         = 1 << 3;
        const SELECT_WORD_BELOW         = 1 << 4;
        const SELECT_LINE_CONTENTS      = 1 << 5;
        const JOIN_LINE                 = 1 << 6;
        const DUPLICATE_LINE            = 1 << 7;
        const DELETE_LINE               = 1 << 8;
        const MOVE_TO_EOL_AND_INSERT_LF = 1 << 9;

        const WORD_MOTIONS = Self::SELECT_CURRENT_WORD.bits()
            | Self::SELECT_NEXT_WORD.bits()
            | Self::SELECT_PREVIOUS_WORD.bits()
            | Self::SELECT_WORD_ABOVE.bits()
            | Self::SELECT_WORD_BELOW.bits();
        const LINE_EDITS = Self::JOIN_LINE.bits()
            | Self::DUPLICATE_LINE.bits()
            | Self::DELETE_LINE.bits()
            | Self::MOVE_TO_EOL_AND_INSERT_LF.bits();
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        CommandSet::all()
    }
}
