//! Shared candidate pool
//!
//! Every word taken out is either consumed by an accepted board or returned
//! exactly once. Both operations hold the same lock for their whole duration.

use crate::io::error::{FourtileError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct PoolState {
    words: Vec<String>,
    rng: StdRng,
}

/// Randomly ordered words awaiting evaluation
pub struct CandidatePool {
    state: Mutex<PoolState>,
    capacity: usize,
}

impl CandidatePool {
    /// Shuffle `words` into a new pool
    pub fn new(mut words: Vec<String>, mut rng: StdRng) -> Self {
        words.shuffle(&mut rng);
        let capacity = words.len();
        Self {
            state: Mutex::new(PoolState { words, rng }),
            capacity,
        }
    }

    /// Remove `n` words from the front of the pool
    ///
    /// Yields nothing when fewer than `n` remain; batches are never partial.
    pub fn take_batch(&self, n: usize) -> Option<Vec<String>> {
        let mut state = self.lock();
        if n == 0 || state.words.len() < n {
            return None;
        }
        Some(state.words.drain(..n).collect())
    }

    /// Put a failed batch back and reshuffle the whole pool
    ///
    /// # Errors
    ///
    /// Returns `PoolOverflow` if the pool would exceed its initial size, which
    /// means words were returned that were never taken
    pub fn return_batch(&self, batch: Vec<String>) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;

        let attempted = state.words.len() + batch.len();
        if attempted > self.capacity {
            return Err(FourtileError::PoolOverflow {
                capacity: self.capacity,
                attempted,
            });
        }

        state.words.extend(batch);
        state.words.shuffle(&mut state.rng);
        Ok(())
    }

    /// Words currently in the pool
    pub fn len(&self) -> usize {
        self.lock().words.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.lock().words.is_empty()
    }

    /// Number of words the pool started with
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy of the pool contents in current order
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().words.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PoolState> {
        // Neither operation leaves the word list half-written, so a poisoned
        // lock still guards a consistent pool
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
