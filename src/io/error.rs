//! Error types and path context for layout operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all layout operations
///
/// Only malformed input and filesystem failures are errors. A search that
/// cannot place every word is a reported outcome, not an error.
#[derive(Debug)]
pub enum LayoutError {
    /// No words were supplied to the engine
    EmptyWordList,

    /// A word cannot be placed on any grid
    InvalidWord {
        /// Position of the word in the input list
        index: usize,
        /// The offending word as supplied
        word: String,
        /// Description of what's wrong with the word
        reason: String,
    },

    /// A word is longer than the grid's maximum dimension
    WordTooLong {
        /// The offending word after normalization
        word: String,
        /// Number of letters in the word
        length: usize,
        /// Configured maximum grid dimension
        max_grid_size: usize,
    },

    /// Search parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Command-line target is neither a word list nor a directory of them
    InvalidTarget {
        /// Path given on the command line
        path: PathBuf,
        /// Explanation of why the target was rejected
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::InvalidWord {
                index,
                word,
                reason,
            } => {
                write!(f, "Invalid word #{index} '{word}': {reason}")
            }
            Self::WordTooLong {
                word,
                length,
                max_grid_size,
            } => {
                write!(
                    f,
                    "Word '{word}' has {length} letters but the grid is only {max_grid_size}x{max_grid_size}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
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
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Attaches the path and operation to a failed filesystem call
pub trait WithPath<T> {
    /// Convert an I/O failure into a [`LayoutError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| LayoutError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid target error
pub fn invalid_target(path: &Path, reason: &impl ToString) -> LayoutError {
    LayoutError::InvalidTarget {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
