//! Board evaluation
//!
//! A batch is cut into tiles with a random slot order per word, then checked
//! against the board rules:
//! - no tile may appear twice across the whole batch
//! - the words spelled by exactly `tiles_per_word` tiles must be the batch itself
//! - shorter arrangements must spell more than `min_words_per_game` words, none
//!   of them a primary word
//!
//! Any failed rule is a rejection, not an error. Errors are reserved for
//! batches that break the calling contract.

use crate::geometry::TileGeometry;
use crate::io::configuration::GameRules;
use crate::io::error::{FourtileError, Result};
use crate::lexicon::Lexicon;
use crate::search::board::Board;
use itertools::Itertools;
use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, HashSet};

/// Validates candidate batches against the board rules
///
/// Holds only shared references, so one evaluator serves every worker.
#[derive(Clone, Copy, Debug)]
pub struct BoardEvaluator<'a> {
    lexicon: &'a Lexicon,
    geometry: &'a TileGeometry,
    rules: GameRules,
}

impl<'a> BoardEvaluator<'a> {
    /// Create an evaluator over a dictionary and its tile geometry
    pub const fn new(lexicon: &'a Lexicon, geometry: &'a TileGeometry, rules: GameRules) -> Self {
        Self {
            lexicon,
            geometry,
            rules,
        }
    }

    /// Rules this evaluator enforces
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Cut `word` into consecutive tiles
    ///
    /// The tile sizes come from the word length's canonical pattern; only the
    /// order they are applied in is random. The tiles always concatenate back
    /// to `word`.
    ///
    /// # Errors
    ///
    /// Returns `LengthOutOfRange` if the word length is not admissible
    pub fn decompose<'w, R: Rng + ?Sized>(&self, word: &'w str, rng: &mut R) -> Result<Vec<&'w str>> {
        let mut sizes = self.geometry.pattern_for(word.chars().count())?.to_vec();
        sizes.shuffle(rng);

        let mut tiles = Vec::with_capacity(sizes.len());
        let mut rest = word;
        for size in sizes {
            let cut = rest
                .char_indices()
                .nth(size)
                .map_or(rest.len(), |(index, _)| index);
            let (tile, tail) = rest.split_at(cut);
            tiles.push(tile);
            rest = tail;
        }

        Ok(tiles)
    }

    /// Try to build a board from exactly `fourtiles_per_game` words
    ///
    /// Returns `Ok(None)` when the batch breaks a board rule, which is the
    /// common outcome.
    ///
    /// # Errors
    ///
    /// Returns `BatchSize` for a batch of the wrong size and
    /// `LengthOutOfRange` for a word that cannot be cut into tiles. Both are
    /// raised before any tile is cut.
    pub fn evaluate<R: Rng + ?Sized>(&self, words: &[String], rng: &mut R) -> Result<Option<Board>> {
        if words.len() != self.rules.fourtiles_per_game {
            return Err(FourtileError::BatchSize {
                expected: self.rules.fourtiles_per_game,
                actual: words.len(),
            });
        }
        for word in words {
            self.geometry.pattern_for(word.chars().count())?;
        }

        let mut seen = HashSet::with_capacity(self.rules.tiles_per_board());
        let mut tiles = Vec::with_capacity(self.rules.tiles_per_board());
        for word in words {
            for tile in self.decompose(word, rng)? {
                if !seen.insert(tile) {
                    trace!("rejected {words:?}: tile {tile:?} repeats");
                    return Ok(None);
                }
                tiles.push(tile);
            }
        }

        let primary_words: BTreeSet<String> = words.iter().cloned().collect();

        // One extra hit is enough to fail closure
        let fourtiles = self.spelled_words(&tiles, self.rules.tiles_per_word, primary_words.len());
        if fourtiles != primary_words {
            trace!("rejected {words:?}: full-length words {fourtiles:?}");
            return Ok(None);
        }

        let mut other_words = BTreeSet::new();
        for count in self.rules.min_tiles_per_word..self.rules.tiles_per_word {
            other_words.append(&mut self.spelled_words(&tiles, count, usize::MAX));
        }

        if other_words.len() <= self.rules.min_words_per_game {
            trace!(
                "rejected {words:?}: only {} shorter words",
                other_words.len()
            );
            return Ok(None);
        }
        if !other_words.is_disjoint(&primary_words) {
            trace!("rejected {words:?}: a primary word is also a shorter word");
            return Ok(None);
        }

        Ok(Some(Board::new(
            tiles.into_iter().map(str::to_owned).collect(),
            primary_words,
            other_words,
        )))
    }

    /// Dictionary words spelled by ordered arrangements of `count` tiles
    ///
    /// Stops once more than `limit` words have been found.
    fn spelled_words(&self, tiles: &[&str], count: usize, limit: usize) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        for arrangement in tiles.iter().permutations(count) {
            let candidate: String = arrangement.into_iter().copied().collect();
            if self.lexicon.contains(&candidate) {
                found.insert(candidate);
                if found.len() > limit {
                    break;
                }
            }
        }
        found
    }
}
