//! Board search
//!
//! The pool hands out batches, the evaluator judges them, and the driver runs
//! batches concurrently in rounds until the pool can no longer fill a batch.

/// Accepted board value type
pub mod board;
/// Round-based concurrent search over the candidate pool
pub mod driver;
/// Tile decomposition and board rule validation
pub mod evaluator;
/// Shared shuffled pool of candidate words
pub mod pool;

pub use board::Board;
pub use driver::{SearchDriver, SearchSummary};
pub use evaluator::BoardEvaluator;
pub use pool::CandidatePool;
