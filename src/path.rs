//! Hamiltonian cycles.
//!
//! A [`Path`] is a permutation of the node indices `0..n`, read as a closed
//! loop: the last node connects back to the first. Freshly generated paths
//! always start at node 0, which removes rotational (but not reflective)
//! symmetry from the search space. Operators that mutate paths in this
//! crate keep position 0 untouched.

use std::ops::Deref;

use rand::Rng;

use crate::matrix::DistanceMatrix;

/// An ordered visit sequence over all nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<usize>,
}

impl Path {
    /// Generates a random cycle over `n` nodes with node 0 at position 0.
    ///
    /// Each remaining position draws a node uniformly from `0..n` and
    /// redraws while that node is already placed. Redraws grow as the path
    /// fills: O(n log n) expected draws in total (coupon collector).
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        assert!(n > 0, "path needs at least one node");
        let mut nodes = Vec::with_capacity(n);
        let mut placed = vec![false; n];
        nodes.push(0);
        placed[0] = true;

        for _ in 1..n {
            let mut candidate = rng.random_range(0..n);
            while placed[candidate] {
                candidate = rng.random_range(0..n);
            }
            placed[candidate] = true;
            nodes.push(candidate);
        }

        Self { nodes }
    }

    /// The identity order `0, 1, …, n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            nodes: (0..n).collect(),
        }
    }

    /// Cycle length against `matrix`, including the wrap-around edge.
    pub fn length(&self, matrix: &DistanceMatrix) -> u64 {
        matrix.path_length(&self.nodes)
    }

    /// Whether this is a permutation of `0..n` with `n == len()`.
    pub fn is_permutation(&self) -> bool {
        let n = self.nodes.len();
        let mut seen = vec![false; n];
        self.nodes.iter().all(|&v| {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
            true
        })
    }

    /// Exchanges the nodes at two positions.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
    }

    /// Mutable access to the visit order.
    ///
    /// Callers must leave a valid permutation behind.
    pub fn nodes_mut(&mut self) -> &mut [usize] {
        &mut self.nodes
    }

    /// Consumes the path, returning the node order.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// The same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        Self { nodes }
    }

    /// The same cycle starting at position `offset`.
    pub fn rotated(&self, offset: usize) -> Self {
        let mut nodes = self.nodes.clone();
        if !nodes.is_empty() {
            let k = offset % nodes.len();
            nodes.rotate_left(k);
        }
        Self { nodes }
    }
}

impl Deref for Path {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.nodes
    }
}

impl From<Vec<usize>> for Path {
    fn from(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for node in &self.nodes {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{node}")?;
            first = false;
        }
        Ok(())
    }
}
