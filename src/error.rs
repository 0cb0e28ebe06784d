//! Errors returned by the word search generator.

use std::path::PathBuf;

/// An error that happened while building, reading or writing a word search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be opened, read or written.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// The file that was being accessed.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to a stream failed.
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// The text that was parsed into a grid had no rows.
    #[error("grid text contains no rows")]
    EmptyGrid,

    /// A row of the parsed grid did not have as many cells as there are rows.
    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,

        /// The number of cells every row should have.
        expected: usize,

        /// The number of cells actually found.
        found: usize,
    },

    /// A whitespace-separated token in the parsed grid was not a single character.
    #[error("cell at row {row}, column {column} is {token:?}, expected a single character")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,

        /// Zero-based column index.
        column: usize,

        /// The offending token.
        token: String,
    },

    /// Some words exhausted their attempt budget and are missing from the puzzle.
    #[error("could not place {} word(s): {0:?}", .0.len())]
    UnplacedWords(Vec<String>),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
