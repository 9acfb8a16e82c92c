use std::collections::BTreeSet;

/// A validated Fourtile board
///
/// Holds the distinct tiles, the primary words they were cut from, and the
/// shorter words the same tiles also spell. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<String>,
    primary_words: BTreeSet<String>,
    other_words: BTreeSet<String>,
}

impl Board {
    /// Assemble a board from already validated parts
    pub const fn new(
        tiles: Vec<String>,
        primary_words: BTreeSet<String>,
        other_words: BTreeSet<String>,
    ) -> Self {
        Self {
            tiles,
            primary_words,
            other_words,
        }
    }

    /// Tiles in the order they were cut
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Words that use the full tile count
    pub const fn primary_words(&self) -> &BTreeSet<String> {
        &self.primary_words
    }

    /// Shorter words spelled by fewer tiles
    pub const fn other_words(&self) -> &BTreeSet<String> {
        &self.other_words
    }

    /// Primary and other words together
    pub fn all_words(&self) -> BTreeSet<&str> {
        self.primary_words
            .iter()
            .chain(&self.other_words)
            .map(String::as_str)
            .collect()
    }
}
