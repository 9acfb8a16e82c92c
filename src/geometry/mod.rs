//! Tile geometry
//!
//! Maps each admissible word length to the tile sizes its letters are cut into.

/// Greedy canonical patterns and the per-length pattern table
pub mod pattern;

pub use pattern::{TileGeometry, TileSizePattern};
