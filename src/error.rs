use thiserror::Error;

use crate::types::Command;

/// Returned when a host identifier names no known command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
}

/// Why a command stopped before finishing.
///
/// An abort is never reported to the host as a failure: the command completes
/// and whatever the earlier steps changed stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Abort {
    #[error(transparent)]
    Parse(#[from] ParseCommandError),
    #[error("`{0}` is disabled")]
    Disabled(Command),
    #[error("`{0}` is left to the host")]
    Unimplemented(Command),
    #[error("host supplied no selection")]
    NoSelection,
    #[error("line {line} is outside a buffer of {count} lines")]
    LineOutOfRange { line: u32, count: u32 },
    #[error("no character after column {col}")]
    NoNextCharacter { col: u32 },
    #[error("no character before column {col}")]
    NoPreviousCharacter { col: u32 },
    #[error("no line with a word in that direction")]
    NoWordLine,
    #[error("no line adjacent to line {line}")]
    NoAdjacentLine { line: u32 },
    #[error("line {line} is empty")]
    EmptyLine { line: u32 },
}
