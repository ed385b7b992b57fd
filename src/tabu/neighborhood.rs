//! Swap neighborhood scan.
//!
//! The neighborhood of a path is every swap of two positions
//! `1 <= first < second < n`. Position 0 is excluded so the anchor node
//! stays in place. Each candidate is evaluated by swapping, measuring the
//! full cycle, and swapping back: O(n) per candidate, O(n³) per scan.
//!
//! The scan can be split across threads by partitioning the `first`
//! positions; per-thread winners are reduced after all threads join.

use std::ops::Range;
use std::thread;

use crate::matrix::DistanceMatrix;
use crate::partition::partition;

use super::memory::TabuMemory;
use super::types::{ScoredMove, SwapMove};

/// Range of `first` positions that have at least one partner.
pub fn first_positions(n: usize) -> Range<usize> {
    1..n.saturating_sub(1).max(1)
}

/// Finds the shortest non-tabu swap whose `first` position lies in
/// `firsts`.
///
/// Candidates are visited in ascending `(first, second)` order and only a
/// strictly shorter length replaces the current winner, so ties go to the
/// earliest pair. Returns `None` when every candidate in range is tabu or
/// the range is empty.
pub fn best_move(
    matrix: &DistanceMatrix,
    path: &[usize],
    memory: &TabuMemory,
    firsts: Range<usize>,
) -> Option<ScoredMove> {
    let n = path.len();
    let mut nodes = path.to_vec();
    let mut best: Option<ScoredMove> = None;

    for first in firsts.start.max(1)..firsts.end.min(n) {
        for second in (first + 1)..n {
            let mv = SwapMove::new(first, second);
            if memory.contains(mv) {
                continue;
            }
            mv.apply(&mut nodes);
            let length = matrix.path_length(&nodes);
            mv.apply(&mut nodes);

            if best.map_or(true, |b| length < b.length) {
                best = Some(ScoredMove { mv, length });
            }
        }
    }

    best
}

/// Same result as scanning the whole neighborhood with [`best_move`], with
/// the `first` positions split across up to `threads` scoped threads.
///
/// Falls back to a single in-place scan when the split yields one chunk.
pub fn best_move_parallel(
    matrix: &DistanceMatrix,
    path: &[usize],
    memory: &TabuMemory,
    threads: usize,
) -> Option<ScoredMove> {
    let chunks = partition(first_positions(path.len()), threads);
    if chunks.len() <= 1 {
        return best_move(matrix, path, memory, first_positions(path.len()));
    }

    let winners: Vec<Option<ScoredMove>> = thread::scope(|s| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|firsts| s.spawn(move || best_move(matrix, path, memory, firsts)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
            .collect()
    });

    // Chunks are in ascending order, so keeping the first strict minimum
    // preserves the sequential tie-break.
    winners
        .into_iter()
        .flatten()
        .fold(None, |best: Option<ScoredMove>, candidate| match best {
            Some(b) if b.length <= candidate.length => Some(b),
            _ => Some(candidate),
        })
}
