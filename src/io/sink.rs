//! Board output stream
//!
//! Boards are written as a JSON array, one record per line, flushed as soon as
//! each is accepted. The separator follows every record, so a stream closed
//! after an interruption ends with a dangling comma before the closing bracket.
//! That comma is left for the operator to remove.

use crate::io::configuration::{RECORD_SEPARATOR, STREAM_CLOSE, STREAM_OPEN};
use crate::io::error::Result;
use crate::search::board::Board;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Destination for accepted boards
///
/// Called concurrently from workers; implementations must keep records whole.
pub trait BoardSink: Sync {
    /// Write one accepted board
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be encoded or written
    fn submit(&self, board: &Board) -> Result<()>;
}

/// Serialized form of one board
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord<'a> {
    /// Tiles in shuffled order so cut order is not revealed
    pub tiles: Vec<&'a str>,
    /// Primary words, sorted
    pub primary_words: Vec<&'a str>,
    /// Other words, sorted
    pub other_words: Vec<&'a str>,
}

impl<'a> BoardRecord<'a> {
    /// Build the record for `board`, shuffling its tiles with `rng`
    pub fn new<R: Rng + ?Sized>(board: &'a Board, rng: &mut R) -> Self {
        let mut tiles: Vec<&str> = board.tiles().iter().map(String::as_str).collect();
        tiles.shuffle(rng);
        Self {
            tiles,
            primary_words: board.primary_words().iter().map(String::as_str).collect(),
            other_words: board.other_words().iter().map(String::as_str).collect(),
        }
    }
}

struct StreamState<W> {
    writer: W,
    rng: StdRng,
    accepted: usize,
}

/// JSON array stream guarded by a single lock
pub struct JsonStreamSink<W: Write + Send> {
    state: Mutex<StreamState<W>>,
}

impl<W: Write + Send> JsonStreamSink<W> {
    /// Write the opening delimiter and start accepting boards
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter cannot be written
    pub fn open(mut writer: W, rng: StdRng) -> Result<Self> {
        writer.write_all(STREAM_OPEN.as_bytes())?;
        writer.flush()?;
        Ok(Self {
            state: Mutex::new(StreamState {
                writer,
                rng,
                accepted: 0,
            }),
        })
    }

    /// Boards written so far
    pub fn accepted(&self) -> usize {
        self.lock().accepted
    }

    /// Write the closing delimiter and hand back the writer
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter cannot be written or flushed
    pub fn close(self) -> Result<W> {
        let mut state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        state.writer.write_all(STREAM_CLOSE.as_bytes())?;
        state.writer.flush()?;
        Ok(state.writer)
    }

    fn lock(&self) -> MutexGuard<'_, StreamState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> BoardSink for JsonStreamSink<W> {
    fn submit(&self, board: &Board) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;

        // Encode fully before touching the stream
        let mut line = serde_json::to_vec(&BoardRecord::new(board, &mut state.rng))?;
        line.extend_from_slice(RECORD_SEPARATOR.as_bytes());

        state.writer.write_all(&line)?;
        state.writer.flush()?;
        state.accepted += 1;
        Ok(())
    }
}
