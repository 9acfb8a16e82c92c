//! Command-line interface and run orchestration

use crate::geometry::TileGeometry;
use crate::io::configuration::GameRules;
use crate::io::error::{Result, WithPath};
use crate::io::progress::SearchProgress;
use crate::io::sink::JsonStreamSink;
use crate::lexicon::Lexicon;
use crate::search::{BoardEvaluator, CandidatePool, SearchDriver, SearchSummary};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Parser)]
#[command(name = "fourtiles")]
#[command(
    author,
    version,
    about = "Search a word list for Fourtile puzzle boards"
)]
/// Command-line arguments for the board search
pub struct Cli {
    /// Dictionary file with one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Write boards to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Random seed for the pool shuffle and tile cuts
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Progress is drawn only when boards are not going to the terminal
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.output.is_some()
    }
}

/// Loads the dictionary, runs the search, and finalizes the output stream
pub struct Runner {
    cli: Cli,
    rules: GameRules,
    shutdown: Arc<AtomicBool>,
}

impl Runner {
    /// Create a runner with the default game rules
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            rules: GameRules::default(),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the game rules
    #[must_use]
    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Flag that stops the search after the round in flight
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Raise the shutdown flag on Ctrl+C; a second Ctrl+C exits at once
    ///
    /// # Errors
    ///
    /// Returns `SignalHandler` if a handler is already installed or the
    /// platform refuses one
    pub fn install_interrupt_handler(&self) -> Result<()> {
        let shutdown = self.shutdown_flag();
        ctrlc::set_handler(move || {
            if shutdown.swap(true, Ordering::SeqCst) {
                force_exit();
            }
        })?;
        Ok(())
    }

    /// Run the search to completion or interruption
    ///
    /// The output stream is closed on every path that opened it, including
    /// worker failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules are inconsistent, the dictionary cannot
    /// be read, or the output cannot be written
    pub fn run(&self) -> Result<SearchSummary> {
        self.rules.validate()?;

        let lexicon = Lexicon::load(&self.cli.dictionary)?;
        let geometry = TileGeometry::new(&self.rules)?;
        let candidates = lexicon.candidate_words(&geometry);
        info!(
            "{} dictionary words, {} candidates of length {}..={}",
            lexicon.len(),
            candidates.len(),
            geometry.min_length(),
            geometry.max_length()
        );

        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let pool = CandidatePool::new(candidates, StdRng::seed_from_u64(rng.random()));
        let evaluator = BoardEvaluator::new(&lexicon, &geometry, self.rules);
        let progress = if self.cli.should_show_progress() {
            SearchProgress::new(pool.capacity(), self.rules.fourtiles_per_game)
        } else {
            SearchProgress::hidden(pool.capacity(), self.rules.fourtiles_per_game)
        };

        let summary = match &self.cli.output {
            Some(path) => {
                let file = File::create(path).with_path(path, "create output")?;
                self.search(
                    BufWriter::new(file),
                    &evaluator,
                    &pool,
                    &progress,
                    &mut rng,
                )
            }
            None => self.search(
                std::io::stdout(),
                &evaluator,
                &pool,
                &progress,
                &mut rng,
            ),
        };

        progress.finish();

        let summary = summary?;
        if summary.interrupted {
            notify_interrupted(&summary);
        }
        Ok(summary)
    }

    fn search<W: Write + Send>(
        &self,
        writer: W,
        evaluator: &BoardEvaluator<'_>,
        pool: &CandidatePool,
        progress: &SearchProgress,
        rng: &mut StdRng,
    ) -> Result<SearchSummary> {
        let sink = JsonStreamSink::open(writer, StdRng::seed_from_u64(rng.random()))?;

        let driver =
            SearchDriver::new(evaluator, pool, &sink, self.shutdown_flag()).with_progress(progress);

        let outcome = driver.run(rng);
        info!("{} boards written", sink.accepted());
        let closed = sink.close();
        let summary = outcome?;
        closed?;
        Ok(summary)
    }
}

/// Operator notice for an interrupted search
///
/// The closing bracket is always written, but the last record keeps its
/// separator, so the comma advice only applies once a board is out.
pub fn interrupt_notice(summary: &SearchSummary) -> String {
    if summary.accepted == 0 {
        "Interrupted before any board was found".to_owned()
    } else {
        format!(
            "Interrupted after {} boards; remove the trailing comma before the closing bracket",
            summary.accepted
        )
    }
}

// Allow print for the operator notice about the unterminated last record
#[allow(clippy::print_stderr)]
fn notify_interrupted(summary: &SearchSummary) {
    eprintln!("{}", interrupt_notice(summary));
}

// Allow exit so a second Ctrl+C does not wait for the round to drain
#[allow(clippy::exit)]
fn force_exit() -> ! {
    std::process::exit(130)
}
