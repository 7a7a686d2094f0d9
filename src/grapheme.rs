//! Grapheme view of a line and column correction for extender scalars.
//!
//! Scans walk grapheme clusters, but hosts count columns at a finer grain: an
//! emoji sequence occupies one cluster and several columns. Each extender
//! scalar inside a cluster accounts for one extra column.

use unicode_segmentation::UnicodeSegmentation;

use crate::chars::{grapheme_extenders, grapheme_is_space, grapheme_is_word};

/// A line split into extended grapheme clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphemeLine<'a> {
    graphemes: Vec<&'a str>,
}

impl<'a> GraphemeLine<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            graphemes: text.graphemes(true).collect(),
        }
    }

    /// Length in grapheme clusters.
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.graphemes.get(index).copied()
    }

    pub fn graphemes(&self) -> &[&'a str] {
        &self.graphemes
    }

    /// Clusters strictly before `index`, clamped to the line.
    pub fn before(&self, index: usize) -> &[&'a str] {
        &self.graphemes[..index.min(self.len())]
    }

    /// Clusters from `index` to the end, empty past the line end.
    pub fn starting_at(&self, index: usize) -> &[&'a str] {
        &self.graphemes[index.min(self.len())..]
    }

    pub fn is_word_at(&self, index: usize) -> bool {
        self.get(index).is_some_and(grapheme_is_word)
    }

    /// True when at least one cluster is a word character.
    pub fn has_word(&self) -> bool {
        self.graphemes.iter().copied().any(grapheme_is_word)
    }

    /// Leading whitespace clusters.
    pub fn leading_spaces(&self) -> usize {
        self.graphemes
            .iter()
            .take_while(|g| grapheme_is_space(g))
            .count()
    }

    /// Trailing whitespace clusters.
    pub fn trailing_spaces(&self) -> usize {
        self.graphemes
            .iter()
            .rev()
            .take_while(|g| grapheme_is_space(g))
            .count()
    }
}

/// Count the extender scalars in `span`.
pub fn count_extenders(span: &[&str]) -> usize {
    span.iter().map(|g| grapheme_extenders(g)).sum()
}

/// Host column of the cluster at `index`.
pub fn display_column(line: &GraphemeLine<'_>, index: usize) -> usize {
    index + count_extenders(line.before(index))
}

/// Cluster index for a host column, the inverse of [`display_column`].
///
/// A column that falls inside a widened cluster rounds up to the next
/// boundary. Columns past the line end keep their overshoot so bounds checks
/// on the result still fail.
pub fn grapheme_index(line: &GraphemeLine<'_>, column: usize) -> usize {
    let mut acc = 0;
    for (index, grapheme) in line.graphemes().iter().enumerate() {
        if acc >= column {
            return index;
        }
        acc += 1 + grapheme_extenders(grapheme);
    }
    line.len() + column.saturating_sub(acc)
}
