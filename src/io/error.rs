//! Error types and path context for search operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all search operations
///
/// Board rejections are not errors. Everything here is fatal to a run.
#[derive(Debug)]
pub enum FourtileError {
    /// Failed to read the dictionary file
    WordListLoad {
        /// Path to the dictionary
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// General file system or stream operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A board record could not be encoded
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Rule or command-line validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No tile size pattern exists for an admissible word length
    ///
    /// Indicates inconsistent tile bounds rather than bad input.
    NoTilePattern {
        /// Word length that could not be split
        length: usize,
        /// Required number of tiles
        tiles_per_word: usize,
        /// Lower tile length bound
        min_chars: usize,
        /// Upper tile length bound
        max_chars: usize,
    },

    /// A tile pattern was requested for a length outside the admissible range
    LengthOutOfRange {
        /// Requested word length
        length: usize,
        /// Shortest admissible length
        min: usize,
        /// Longest admissible length
        max: usize,
    },

    /// The evaluator was handed a batch of the wrong size
    BatchSize {
        /// Words required per board
        expected: usize,
        /// Words actually supplied
        actual: usize,
    },

    /// More words were returned to the candidate pool than it ever held
    PoolOverflow {
        /// Initial pool size
        capacity: usize,
        /// Pool size the return would have produced
        attempted: usize,
    },

    /// The interrupt handler could not be installed
    SignalHandler {
        /// Description from the signal layer
        reason: String,
    },
}

impl fmt::Display for FourtileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordListLoad { path, source } => {
                write!(f, "Failed to load word list '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to encode board record: {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoTilePattern {
                length,
                tiles_per_word,
                min_chars,
                max_chars,
            } => {
                write!(
                    f,
                    "No pattern of {tiles_per_word} tiles sized {min_chars}..={max_chars} covers length {length}"
                )
            }
            Self::LengthOutOfRange { length, min, max } => {
                write!(f, "Word length {length} is outside admissible range {min}..={max}")
            }
            Self::BatchSize { expected, actual } => {
                write!(f, "Board batch needs exactly {expected} words, got {actual}")
            }
            Self::PoolOverflow {
                capacity,
                attempted,
            } => {
                write!(
                    f,
                    "Candidate pool would grow to {attempted} words past its capacity of {capacity}"
                )
            }
            Self::SignalHandler { reason } => {
                write!(f, "Failed to install interrupt handler: {reason}")
            }
        }
    }
}

impl std::error::Error for FourtileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordListLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for search results
pub type Result<T> = std::result::Result<T, FourtileError>;

/// Attaches the path being worked on to I/O failures
pub trait WithPath<T> {
    /// Wrap an I/O error as a `FileSystem` error naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| FourtileError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for FourtileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stream>"),
            operation: "write",
            source: err,
        }
    }
}

impl From<serde_json::Error> for FourtileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<ctrlc::Error> for FourtileError {
    fn from(err: ctrlc::Error) -> Self {
        Self::SignalHandler {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FourtileError {
    FourtileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
