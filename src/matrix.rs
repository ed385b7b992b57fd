//! Distance matrix.
//!
//! An immutable N×N table of non-negative integer travel costs. Built once,
//! then shared read-only (typically behind an [`Arc`](std::sync::Arc)) by
//! every engine and every worker thread.
//!
//! # Text format
//!
//! One row per line, whitespace-separated non-negative integers, no header.
//! Blank lines are skipped.
//!
//! ```text
//! 0 10 15 20
//! 10 0 35 25
//! 15 35 0 30
//! 20 25 30 0
//! ```
//!
//! Symmetry (`cost(i, j) == cost(j, i)`) is assumed by the engines but not
//! enforced. The diagonal is never read.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path as FsPath;

use crate::error::{Result, SalesmanError};

/// Square table of pairwise travel costs.
///
/// # Examples
///
/// ```
/// use u_salesman::DistanceMatrix;
///
/// let m = DistanceMatrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap();
/// assert_eq!(m.len(), 2);
/// assert_eq!(m.cost(0, 1), 5);
/// assert_eq!(m.path_length(&[0, 1]), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    // Row-major, n * n entries.
    costs: Vec<u64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, validating that it is square with at
    /// least two nodes.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(SalesmanError::EmptyMatrix);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(SalesmanError::NotSquare {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
        }
        if n < 2 {
            return Err(SalesmanError::TooFewNodes(n));
        }

        let costs = rows.into_iter().flatten().collect();
        Ok(Self { n, costs })
    }

    /// Parses the textual format described in the module docs.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Reads and parses a matrix from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rows = Vec::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<u64>().map_err(|_| SalesmanError::Parse {
                        line: idx + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<u64>>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Reads a matrix from a file on disk.
    pub fn from_file<P: AsRef<FsPath>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Number of nodes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is `>= len()`.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> u64 {
        assert!(from < self.n && to < self.n, "node index out of range");
        self.costs[from * self.n + to]
    }

    /// Total cost of the closed cycle visiting `nodes` in order, including
    /// the wrap-around edge from the last node back to the first.
    ///
    /// The sum saturates at `u64::MAX` instead of wrapping, so oversized
    /// costs can tie but never look shorter than they are.
    ///
    /// # Panics
    /// Panics if `nodes` is empty or contains an index `>= len()`. Paths
    /// produced by this crate never do.
    pub fn path_length(&self, nodes: &[usize]) -> u64 {
        assert!(!nodes.is_empty(), "path must not be empty");
        let closing = self.cost(nodes[nodes.len() - 1], nodes[0]);
        nodes
            .windows(2)
            .map(|w| self.cost(w[0], w[1]))
            .fold(closing, u64::saturating_add)
    }
}
