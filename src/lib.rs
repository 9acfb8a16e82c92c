//! Randomized search for Fourtile word puzzle boards
//!
//! Dictionary words are cut into letter tiles and grouped five at a time. A group
//! becomes a board only when its tiles rebuild exactly those five words at full
//! length and enough shorter words besides. Failed groups go back into a shared
//! shuffled pool and are retried in later concurrent rounds.

#![forbid(unsafe_code)]

/// Canonical tile size patterns for admissible word lengths
pub mod geometry;
/// Command-line surface, configuration, errors, progress, and board output
pub mod io;
/// Dictionary loading and candidate word filtering
pub mod lexicon;
/// Candidate pool, board evaluation, and the round-based search driver
pub mod search;

pub use io::error::{FourtileError, Result};
