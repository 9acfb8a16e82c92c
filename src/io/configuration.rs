//! Game constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Board shape
/// Number of tiles every primary word is cut into
pub const TILES_PER_WORD: usize = 4;
/// Number of primary words that define one board
pub const FOURTILES_PER_GAME: usize = 5;

// Tile size bounds
/// Fewest letters a tile may hold
pub const MIN_CHARS_PER_TILE: usize = 2;
/// Most letters a tile may hold
pub const MAX_CHARS_PER_TILE: usize = 4;

// Secondary word requirements
/// Fewest tiles an additional word may be built from
pub const MIN_TILES_PER_WORD: usize = 2;
/// Additional word count a board must strictly exceed
pub const MIN_WORDS_PER_GAME: usize = 20;

// Output stream framing
/// Written once before the first board
pub const STREAM_OPEN: &str = "[\n";
/// Written after every board record, including the last one
pub const RECORD_SEPARATOR: &str = ",\n";
/// Written once when the search ends or is interrupted
pub const STREAM_CLOSE: &str = "]\n";

/// The combinatorial knobs of a Fourtile board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRules {
    /// Tiles per primary word
    pub tiles_per_word: usize,
    /// Primary words per board
    pub fourtiles_per_game: usize,
    /// Lower bound on tile length
    pub min_chars_per_tile: usize,
    /// Upper bound on tile length
    pub max_chars_per_tile: usize,
    /// Lower bound on tiles used by an additional word
    pub min_tiles_per_word: usize,
    /// Additional word count that must be exceeded
    pub min_words_per_game: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            tiles_per_word: TILES_PER_WORD,
            fourtiles_per_game: FOURTILES_PER_GAME,
            min_chars_per_tile: MIN_CHARS_PER_TILE,
            max_chars_per_tile: MAX_CHARS_PER_TILE,
            min_tiles_per_word: MIN_TILES_PER_WORD,
            min_words_per_game: MIN_WORDS_PER_GAME,
        }
    }
}

impl GameRules {
    /// Total number of distinct tiles on a board
    pub const fn tiles_per_board(&self) -> usize {
        self.fourtiles_per_game * self.tiles_per_word
    }

    /// Shortest word that can be cut into `tiles_per_word` tiles
    pub const fn min_word_len(&self) -> usize {
        self.tiles_per_word * self.min_chars_per_tile
    }

    /// Longest word that can be cut into `tiles_per_word` tiles
    pub const fn max_word_len(&self) -> usize {
        self.tiles_per_word * self.max_chars_per_tile
    }

    /// Reject rule sets no board could ever satisfy
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first inconsistent knob
    pub fn validate(&self) -> Result<()> {
        if self.tiles_per_word == 0 {
            return Err(invalid_parameter(
                "tiles_per_word",
                &self.tiles_per_word,
                &"must be positive",
            ));
        }
        if self.fourtiles_per_game == 0 {
            return Err(invalid_parameter(
                "fourtiles_per_game",
                &self.fourtiles_per_game,
                &"must be positive",
            ));
        }
        if self.min_chars_per_tile == 0 {
            return Err(invalid_parameter(
                "min_chars_per_tile",
                &self.min_chars_per_tile,
                &"must be positive",
            ));
        }
        if self.min_chars_per_tile > self.max_chars_per_tile {
            return Err(invalid_parameter(
                "max_chars_per_tile",
                &self.max_chars_per_tile,
                &format!("must be at least min_chars_per_tile ({})", self.min_chars_per_tile),
            ));
        }
        if self.min_tiles_per_word == 0 || self.min_tiles_per_word >= self.tiles_per_word {
            return Err(invalid_parameter(
                "min_tiles_per_word",
                &self.min_tiles_per_word,
                &format!("must be in 1..{}", self.tiles_per_word),
            ));
        }
        Ok(())
    }
}
