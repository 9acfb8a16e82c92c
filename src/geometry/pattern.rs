//! Canonical tile size patterns
//!
//! Every admissible word length has one multiset of tile sizes. It is built
//! greedily: all slots start at the minimum and the first slot still below the
//! maximum grows until the sizes sum to the length. Randomness only enters
//! later, when the evaluator permutes the order the slots are applied in.

use crate::io::configuration::GameRules;
use crate::io::error::{FourtileError, Result};

/// Tile sizes for one word length, one entry per tile slot
pub type TileSizePattern = Vec<usize>;

/// Build the canonical pattern for `length`
///
/// # Errors
///
/// Returns `NoTilePattern` if no `tiles_per_word` slots within
/// `[min_chars, max_chars]` can sum to `length`
pub fn canonical_pattern(
    length: usize,
    tiles_per_word: usize,
    min_chars: usize,
    max_chars: usize,
) -> Result<TileSizePattern> {
    let no_pattern = || FourtileError::NoTilePattern {
        length,
        tiles_per_word,
        min_chars,
        max_chars,
    };

    let mut sizes = vec![min_chars; tiles_per_word];
    let mut total = tiles_per_word * min_chars;
    if total > length {
        return Err(no_pattern());
    }

    while total < length {
        let slot = sizes
            .iter_mut()
            .find(|size| **size < max_chars)
            .ok_or_else(no_pattern)?;
        *slot += 1;
        total += 1;
    }

    Ok(sizes)
}

/// Precomputed pattern table covering every admissible word length
///
/// Built once per run and shared read-only between workers.
#[derive(Clone, Debug)]
pub struct TileGeometry {
    min_length: usize,
    patterns: Vec<TileSizePattern>,
}

impl TileGeometry {
    /// Compute the pattern for each length the rules admit
    ///
    /// # Errors
    ///
    /// Returns `NoTilePattern` if any admissible length cannot be split, which
    /// means the tile bounds themselves are inconsistent
    pub fn new(rules: &GameRules) -> Result<Self> {
        let patterns = (rules.min_word_len()..=rules.max_word_len())
            .map(|length| {
                canonical_pattern(
                    length,
                    rules.tiles_per_word,
                    rules.min_chars_per_tile,
                    rules.max_chars_per_tile,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            min_length: rules.min_word_len(),
            patterns,
        })
    }

    /// Pattern for a word of `length` letters
    ///
    /// # Errors
    ///
    /// Returns `LengthOutOfRange` for lengths the rules do not admit
    pub fn pattern_for(&self, length: usize) -> Result<&[usize]> {
        length
            .checked_sub(self.min_length)
            .and_then(|index| self.patterns.get(index))
            .map(Vec::as_slice)
            .ok_or(FourtileError::LengthOutOfRange {
                length,
                min: self.min_length,
                max: self.max_length(),
            })
    }

    /// Shortest admissible word length
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Longest admissible word length
    pub fn max_length(&self) -> usize {
        (self.min_length + self.patterns.len()).saturating_sub(1)
    }

    /// Whether a word of `length` letters can be cut into tiles
    pub fn is_admissible(&self, length: usize) -> bool {
        (self.min_length..=self.max_length()).contains(&length)
    }
}
