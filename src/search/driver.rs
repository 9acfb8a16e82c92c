//! Round-based concurrent search
//!
//! Each round drains the pool into full batches, evaluates them in parallel,
//! and waits for every worker before looking at the pool again. Accepted
//! boards go to the sink; rejected batches go back into the pool.

use crate::io::error::{FourtileError, Result};
use crate::io::progress::SearchProgress;
use crate::io::sink::BoardSink;
use crate::search::evaluator::BoardEvaluator;
use crate::search::pool::CandidatePool;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Outcome of a finished or interrupted search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Rounds started
    pub rounds: usize,
    /// Boards handed to the sink
    pub accepted: usize,
    /// Batches put back without evaluation because shutdown was raised mid-round
    pub abandoned: usize,
    /// Words left in the pool
    pub remaining: usize,
    /// Whether the shutdown flag ended the search
    pub interrupted: bool,
}

/// What became of one batch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attempt {
    Accepted,
    Rejected,
    Abandoned,
}

/// Round totals gathered from the workers
#[derive(Default)]
struct RoundTally {
    accepted: AtomicUsize,
    abandoned: AtomicUsize,
}

/// Drives evaluation rounds until the pool cannot fill another batch
pub struct SearchDriver<'a, S: BoardSink> {
    evaluator: &'a BoardEvaluator<'a>,
    pool: &'a CandidatePool,
    sink: &'a S,
    progress: Option<&'a SearchProgress>,
    shutdown: Arc<AtomicBool>,
}

impl<'a, S: BoardSink> SearchDriver<'a, S> {
    /// Create a driver; `shutdown` ends the search and skips batches not yet evaluated
    pub const fn new(
        evaluator: &'a BoardEvaluator<'a>,
        pool: &'a CandidatePool,
        sink: &'a S,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        Self {
            evaluator,
            pool,
            sink,
            progress: None,
            shutdown,
        }
    }

    /// Report accepted boards and round numbers to `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: &'a SearchProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run rounds until the pool holds fewer than one batch or shutdown is raised
    ///
    /// `rng` seeds every worker, so a fixed seed fixes each batch's tile cuts.
    ///
    /// # Errors
    ///
    /// Returns the first worker error of a round once that round has finished.
    /// Board rejections never surface here.
    pub fn run(&self, rng: &mut StdRng) -> Result<SearchSummary> {
        let batch_size = self.evaluator.rules().fourtiles_per_game;
        let mut summary = SearchSummary::default();

        while !self.is_interrupted() {
            let batches = self.draw_round(batch_size);
            if batches.is_empty() {
                break;
            }

            summary.rounds += 1;
            if let Some(progress) = self.progress {
                progress.set_round(summary.rounds);
            }

            let attempted = batches.len();
            let (accepted, abandoned) = self.run_round(batches, rng)?;
            summary.accepted += accepted;
            summary.abandoned += abandoned;
            debug!(
                "round {}: {accepted}/{attempted} accepted, {abandoned} abandoned, {} words pooled",
                summary.rounds,
                self.pool.len()
            );
        }

        summary.remaining = self.pool.len();
        summary.interrupted = self.is_interrupted();
        trace!("unused words: {:?}", self.pool.snapshot());
        info!(
            "search stopped after {} rounds with {} boards, {} words unused",
            summary.rounds, summary.accepted, summary.remaining
        );
        Ok(summary)
    }

    /// Take full batches until the pool runs short; the remainder stays pooled
    fn draw_round(&self, batch_size: usize) -> Vec<Vec<String>> {
        std::iter::from_fn(|| self.pool.take_batch(batch_size)).collect()
    }

    /// Evaluate every batch in parallel; returns accepted and abandoned counts
    fn run_round(&self, batches: Vec<Vec<String>>, rng: &mut StdRng) -> Result<(usize, usize)> {
        let tally = RoundTally::default();
        let failure: Mutex<Option<FourtileError>> = Mutex::new(None);

        rayon::scope(|scope| {
            for batch in batches {
                let seed = rng.random::<u64>();
                let tally = &tally;
                let failure = &failure;
                scope.spawn(move |_| match self.attempt(batch, seed) {
                    Ok(Attempt::Accepted) => {
                        tally.accepted.fetch_add(1, Ordering::Relaxed);
                    }
                    Ok(Attempt::Abandoned) => {
                        tally.abandoned.fetch_add(1, Ordering::Relaxed);
                    }
                    Ok(Attempt::Rejected) => {}
                    Err(error) => {
                        let mut first = failure.lock().unwrap_or_else(PoisonError::into_inner);
                        if first.is_none() {
                            *first = Some(error);
                        }
                    }
                });
            }
        });

        match failure.into_inner().unwrap_or_else(PoisonError::into_inner) {
            Some(error) => Err(error),
            None => Ok((
                tally.accepted.into_inner(),
                tally.abandoned.into_inner(),
            )),
        }
    }

    /// Evaluate one batch and route it to the sink or back to the pool
    fn attempt(&self, batch: Vec<String>, seed: u64) -> Result<Attempt> {
        // Batches still queued when shutdown is raised are not evaluated
        if self.is_interrupted() {
            self.pool.return_batch(batch)?;
            return Ok(Attempt::Abandoned);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        match self.evaluator.evaluate(&batch, &mut rng) {
            // Boards found after shutdown are dropped whole, never half-written
            Ok(Some(board)) if !self.is_interrupted() => {
                self.sink.submit(&board)?;
                if let Some(progress) = self.progress {
                    progress.advance();
                }
                Ok(Attempt::Accepted)
            }
            Ok(_) => {
                self.pool.return_batch(batch)?;
                Ok(Attempt::Rejected)
            }
            Err(error) => {
                self.pool.return_batch(batch)?;
                Err(error)
            }
        }
    }

    fn is_interrupted(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}
