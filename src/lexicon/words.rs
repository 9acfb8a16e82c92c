//! Dictionary word set
//!
//! Read once from a one-word-per-line source and shared read-only for the rest
//! of the run. Word content is taken as given; only blank lines are dropped.

use crate::geometry::TileGeometry;
use crate::io::error::{FourtileError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Deduplicated dictionary used for every membership test
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from in-memory words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Read one word per line
    ///
    /// # Errors
    ///
    /// Propagates any read failure from the underlying source
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_owned());
            }
        }
        Ok(Self { words })
    }

    /// Load the dictionary file at `path`
    ///
    /// # Errors
    ///
    /// Returns `WordListLoad` if the file cannot be opened or read
    pub fn load(path: &Path) -> Result<Self> {
        let load_error = |source| FourtileError::WordListLoad {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(load_error)?;
        Self::from_reader(BufReader::new(file)).map_err(load_error)
    }

    /// Whether `word` is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words whose length can be cut into a full set of tiles
    ///
    /// Sorted so that a seeded pool shuffle is reproducible.
    pub fn candidate_words(&self, geometry: &TileGeometry) -> Vec<String> {
        let mut candidates: Vec<String> = self
            .iter()
            .filter(|word| geometry.is_admissible(word.chars().count()))
            .map(str::to_owned)
            .collect();
        candidates.sort_unstable();
        candidates
    }
}
