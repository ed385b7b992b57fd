//! Error types.

use std::io;

/// Errors raised while building a distance matrix or starting a search.
///
/// Search-internal degenerate states (e.g. a neighborhood that is entirely
/// tabu) are recovered inside the engines and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum SalesmanError {
    /// The matrix has no rows.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// A row's length differs from the row count.
    #[error("distance matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Expected number of entries (the row count).
        expected: usize,
        /// Number of entries actually found.
        found: usize,
    },

    /// Fewer than two nodes; no cycle can be formed.
    #[error("distance matrix needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),

    /// A token in the textual matrix is not a non-negative integer.
    #[error("line {line}: invalid distance {token:?}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// The matrix source could not be read.
    #[error("failed to read distance matrix: {0}")]
    Io(#[from] io::Error),

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SalesmanError>;
