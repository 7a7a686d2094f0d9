pub mod chars;
pub mod content;
pub mod edit;
pub mod engine;
pub mod error;
pub mod grapheme;
pub mod scan;
pub mod traits;
pub mod types;
pub mod word;

pub use crate::chars::{CharClass, categorize_char};
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::{Abort, ParseCommandError};
pub use crate::grapheme::GraphemeLine;
pub use crate::traits::LineBuffer;
pub use crate::types::{Command, CommandSet, Position, Selection};
