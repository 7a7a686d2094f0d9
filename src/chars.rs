//! Character classification used by every scan in the crate.
//!
//! The word alphabet is deliberately narrow: ASCII letters and digits, the
//! underscore, and the Nordic letters `ÅÄÆÖØåäæöø`. It is not a general
//! Unicode letter test.

/// The class a single scalar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Part of a word.
    Word,
    /// Space, tab, newline or carriage return.
    Space,
    /// Emoji, variation selectors, combining marks for symbols and the zero
    /// width joiner. These widen a grapheme without being selectable.
    GraphemeExtender,
    /// Anything else; terminates a word scan.
    Other,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        categorize_char(ch)
    }
}

const NORDIC: [char; 10] = ['Å', 'Ä', 'Æ', 'Ö', 'Ø', 'å', 'ä', 'æ', 'ö', 'ø'];

const SPACES: [char; 4] = [' ', '\t', '\n', '\r'];

const EXTENDER_RANGES: [(u32, u32); 9] = [
    (0x1F300, 0x1F5FF), // Misc Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x2600, 0x26FF),   // Misc Symbols
    (0x2700, 0x27BF),   // Dingbats
    (0xFE00, 0xFE0F),   // Variation Selectors
    (0x20D0, 0x20FF),   // Combining Diacritical Marks for Symbols
    (0x200D, 0x200D),   // Zero Width Joiner
];

pub fn categorize_char(ch: char) -> CharClass {
    match ch {
        c if char_is_word(c) => CharClass::Word,
        c if char_is_space(c) => CharClass::Space,
        c if char_is_grapheme_extender(c) => CharClass::GraphemeExtender,
        _ => CharClass::Other,
    }
}

#[inline]
pub fn char_is_word(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || NORDIC.contains(&ch)
}

#[inline]
pub fn char_is_space(ch: char) -> bool {
    SPACES.contains(&ch)
}

#[inline]
pub fn char_is_grapheme_extender(ch: char) -> bool {
    let cp = ch as u32;
    EXTENDER_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// A grapheme cluster belongs to a word when any of its scalars does, so a
/// letter followed by a combining accent still counts.
#[inline]
pub fn grapheme_is_word(grapheme: &str) -> bool {
    grapheme.chars().any(char_is_word)
}

/// Same rule as [`grapheme_is_word`] for the whitespace set.
#[inline]
pub fn grapheme_is_space(grapheme: &str) -> bool {
    grapheme.chars().any(char_is_space)
}

/// Number of extender scalars inside one grapheme cluster.
#[inline]
pub fn grapheme_extenders(grapheme: &str) -> usize {
    grapheme
        .chars()
        .filter(|&c| char_is_grapheme_extender(c))
        .count()
}
