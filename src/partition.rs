//! Work partitioning for worker threads.
//!
//! Both engines split an index range into contiguous chunks, one per
//! thread: the GA splits the non-elite slots of the next generation, the
//! tabu search splits its iteration budget across workers and the `first`
//! positions of the swap neighborhood across sub-threads.

use std::ops::Range;

/// Splits `range` into at most `parts` contiguous, non-overlapping,
/// non-empty sub-ranges covering it exactly, in ascending order.
///
/// Every chunk gets `len / parts` items; the first chunk also absorbs the
/// remainder. Chunks that would be empty are omitted, so fewer than
/// `parts` ranges come back when `range` is shorter than `parts`.
///
/// # Examples
///
/// ```
/// use u_salesman::partition::partition;
///
/// assert_eq!(partition(0..10, 3), vec![0..4, 4..7, 7..10]);
/// assert_eq!(partition(1..3, 5), vec![1..2, 2..3]);
/// assert!(partition(4..4, 2).is_empty());
/// ```
pub fn partition(range: Range<usize>, parts: usize) -> Vec<Range<usize>> {
    let len = range.end.saturating_sub(range.start);
    if len == 0 || parts == 0 {
        return Vec::new();
    }
    let parts = parts.min(len);
    let base = len / parts;
    let remainder = len % parts;

    let mut chunks = Vec::with_capacity(parts);
    let mut start = range.start;
    for i in 0..parts {
        let size = if i == 0 { base + remainder } else { base };
        chunks.push(start..start + size);
        start += size;
    }
    chunks
}

/// Splits `total` into `parts` counts following the same rule as
/// [`partition`].
pub fn split_count(total: usize, parts: usize) -> Vec<usize> {
    partition(0..total, parts).into_iter().map(|r| r.len()).collect()
}
