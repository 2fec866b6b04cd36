//! Error types for treecmp
//!
//! Errors fall into three groups:
//!
//! - **Validation**: a user-supplied path is missing, is not a directory, or
//!   cannot be opened for writing. Prompts recover from these by asking again.
//! - **Per-file**: a file that should be comparable cannot be opened or read.
//!   The traversal records these as an `Error` outcome and keeps going.
//! - **Setup**: anything else (the walk itself failing, standard input
//!   closing). These escape the run and end the process.

use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Results in the treecmp library
pub type Result<T> = std::result::Result<T, TreecmpError>;

/// Main error type for all treecmp operations
#[derive(Debug, Error)]
pub enum TreecmpError {
    /// A file could not be opened for comparison
    #[error("Failed to open \"{}\".", .path.display())]
    Open {
        /// Path that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O errors during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Walk directory error from walkdir crate
    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// A path that should name a directory does not exist
    #[error("\"{}\" does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A path exists but is not a directory
    #[error("\"{}\" is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The output log file could not be created
    #[error("Could not open output file at \"{}\"", .path.display())]
    OutputUnavailable {
        /// Requested output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Standard input ended while waiting for an answer
    #[error("Input closed before a path was entered")]
    InputClosed,
}

impl TreecmpError {
    /// Create an open error for `path`
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreecmpError::Open {
            path: path.into(),
            source,
        }
    }

    /// Check if this error is a user-input validation failure
    ///
    /// Validation failures are recovered locally by prompting again and are
    /// never reported as a failed run.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TreecmpError::DirectoryNotFound(_)
                | TreecmpError::NotADirectory(_)
                | TreecmpError::OutputUnavailable { .. }
        )
    }
}
