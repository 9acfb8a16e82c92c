//! Accepted-board progress display
//!
//! The bar's length is the most boards the pool could ever yield, so it rarely
//! fills; it shows how much of the candidate supply has been turned into boards.

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len} boards")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting accepted boards
///
/// Shared by reference between workers; indicatif handles the synchronization.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    /// Create a visible bar sized for `candidate_count / batch_size` boards
    pub fn new(candidate_count: usize, batch_size: usize) -> Self {
        Self::with_bar(ProgressBar::new(max_boards(candidate_count, batch_size)))
    }

    /// Create a bar that tracks counts without drawing
    pub fn hidden(candidate_count: usize, batch_size: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(max_boards(candidate_count, batch_size));
        Self::with_bar(bar)
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message("round 0");
        Self { bar }
    }

    /// Record one accepted board
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Show the round currently being evaluated
    pub fn set_round(&self, round: usize) {
        self.bar.set_message(format!("round {round}"));
    }

    /// Boards recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Theoretical maximum number of boards
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        debug!(
            "{} of at most {} boards found",
            self.position(),
            self.length().unwrap_or_default()
        );
        self.bar.finish_and_clear();
    }
}

const fn max_boards(candidate_count: usize, batch_size: usize) -> u64 {
    if batch_size == 0 {
        0
    } else {
        (candidate_count / batch_size) as u64
    }
}
