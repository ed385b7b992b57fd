//! Shared fixtures for unit tests.

use rand::Rng;

use crate::matrix::DistanceMatrix;
use crate::random::create_rng;

/// The 4-node instance whose optimal cycle `0, 1, 3, 2` has length 80.
pub(crate) fn four_node() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ])
    .unwrap()
}

/// Two nodes, five apart. The only cycle has length 10.
pub(crate) fn two_node() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap()
}

/// Random symmetric matrix with costs in `1..100`.
pub(crate) fn random_symmetric(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = create_rng(seed);
    let mut rows = vec![vec![0u64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let c = rng.random_range(1..100);
            rows[i][j] = c;
            rows[j][i] = c;
        }
    }
    DistanceMatrix::from_rows(rows).unwrap()
}

/// Nodes on a ring: cost is the shorter arc distance, so the identity
/// order is optimal with length `n`.
pub(crate) fn ring(n: usize) -> DistanceMatrix {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let d = i.abs_diff(j);
                    d.min(n - d) as u64
                })
                .collect()
        })
        .collect();
    DistanceMatrix::from_rows(rows).unwrap()
}

/// Whether `nodes` is a permutation of `0..n`.
pub(crate) fn is_valid_permutation(nodes: &[usize], n: usize) -> bool {
    if nodes.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in nodes {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
