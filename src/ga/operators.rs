//! Permutation operators for anchored paths.
//!
//! All operators preserve two invariants: the result is a permutation of
//! `0..n`, and whatever node sits at position 0 in the parents (node 0 for
//! every path this crate generates) stays there.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): copy a segment from the first parent, fill
//!   the remaining positions left to right with the second parent's other
//!   nodes in their original relative order.
//!
//! # Mutation
//!
//! - [`anchored_swap_mutation`]: exchange two random positions, never
//!   position 0.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

use crate::path::Path;

// ============================================================================
// Crossover operators
// ============================================================================

/// Picks crossover points `begin < end` in `0..n`.
///
/// Rejects `begin == end` and the full span `(0, n - 1)`, which would copy
/// the first parent whole. Returns `None` when `n < 3`, where no other
/// choice exists.
pub fn random_crossover_points<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 3 {
        return None;
    }
    loop {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if a == b {
            continue;
        }
        let (begin, end) = if a < b { (a, b) } else { (b, a) };
        if begin == 0 && end == n - 1 {
            continue;
        }
        return Some((begin, end));
    }
}

/// Order Crossover (OX) with fixed points.
///
/// 1. Copy `first[begin..=end]` into the child at the same positions
/// 2. Drop those nodes from a copy of `second`, keeping its order
/// 3. Fill child positions `0..begin`, then `end + 1..n`, from what is left
///
/// # Examples
///
/// ```
/// use u_salesman::ga::operators::order_crossover;
///
/// let child = order_crossover(&[0, 1, 2, 3, 4], &[0, 3, 1, 4, 2], 1, 3);
/// assert_eq!(child, vec![0, 1, 2, 3, 4]);
/// ```
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length or `begin <= end < n` does not
/// hold.
pub fn order_crossover(first: &[usize], second: &[usize], begin: usize, end: usize) -> Vec<usize> {
    let n = first.len();
    assert_eq!(n, second.len(), "parents must have equal length");
    assert!(begin <= end && end < n, "crossover points out of range");

    let mut in_segment = vec![false; n];
    for &node in &first[begin..=end] {
        in_segment[node] = true;
    }

    let mut donor = second.iter().copied().filter(|&node| !in_segment[node]);
    let mut child = Vec::with_capacity(n);
    child.extend(donor.by_ref().take(begin));
    child.extend_from_slice(&first[begin..=end]);
    child.extend(donor);

    debug_assert_eq!(child.len(), n);
    child
}

/// Breeds one child from two parents with random crossover points.
///
/// With fewer than three nodes there is nothing to recombine and the
/// first parent is returned unchanged.
pub fn crossover<R: Rng>(first: &Path, second: &Path, rng: &mut R) -> Path {
    match random_crossover_points(first.len(), rng) {
        Some((begin, end)) => Path::from(order_crossover(first, second, begin, end)),
        None => first.clone(),
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swaps two random positions drawn from `1..n`.
///
/// Both positions may coincide, in which case the path is unchanged.
///
/// # Complexity
/// O(1)
pub fn anchored_swap_mutation<R: Rng>(nodes: &mut [usize], rng: &mut R) {
    let n = nodes.len();
    if n < 3 {
        return;
    }
    let a = rng.random_range(1..n);
    let b = rng.random_range(1..n);
    nodes.swap(a, b);
}

// ============================================================================
// Tests
// ============================================================================
