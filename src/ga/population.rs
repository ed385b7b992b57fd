//! Population storage and ordering.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::matrix::DistanceMatrix;
use crate::path::Path;

use super::types::Individual;

/// A non-empty collection of candidate paths.
///
/// Sorted ascending by length only on demand ([`sort`](Self::sort)); the
/// runner sorts once per generation, between the parallel phases.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Generates `size` random anchored paths and measures them.
    ///
    /// Paths are drawn sequentially from `rng`; lengths are computed in
    /// parallel when the `parallel` feature is enabled.
    ///
    /// # Panics
    /// Panics if `size == 0`.
    pub fn random<R: Rng>(size: usize, matrix: &DistanceMatrix, rng: &mut R) -> Self {
        let paths: Vec<Path> = (0..size).map(|_| Path::random(matrix.len(), rng)).collect();
        Self::from_paths(paths, matrix)
    }

    /// Measures the given paths.
    ///
    /// # Panics
    /// Panics if `paths` is empty.
    pub fn from_paths(paths: Vec<Path>, matrix: &DistanceMatrix) -> Self {
        assert!(!paths.is_empty(), "population must not be empty");
        Self {
            individuals: evaluate_all(paths, matrix),
        }
    }

    /// Number of individuals.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Read-only view of the members in their current order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Sorts ascending by length. Equal lengths keep their relative order.
    pub fn sort(&mut self) {
        #[cfg(feature = "parallel")]
        self.individuals.par_sort_by_key(|ind| ind.length);
        #[cfg(not(feature = "parallel"))]
        self.individuals.sort_by_key(|ind| ind.length);
    }

    /// Whether the members are in ascending length order.
    pub fn is_sorted(&self) -> bool {
        self.individuals.windows(2).all(|w| w[0].length <= w[1].length)
    }

    /// The shortest member; the earliest one on ties. After
    /// [`sort`](Self::sort) this is the first member.
    pub fn best(&self) -> &Individual {
        let mut best = &self.individuals[0];
        for ind in &self.individuals[1..] {
            if ind.length < best.length {
                best = ind;
            }
        }
        best
    }

    /// Swaps in `next` as the new membership, leaving the previous members
    /// in `next` for reuse as the following generation's buffer.
    ///
    /// # Panics
    /// Panics if the sizes differ.
    pub fn replace_with(&mut self, next: &mut Vec<Individual>) {
        assert_eq!(
            self.individuals.len(),
            next.len(),
            "replacement generation must keep the population size"
        );
        std::mem::swap(&mut self.individuals, next);
    }

    /// Best, mean and worst length.
    pub fn length_summary(&self) -> (u64, f64, u64) {
        let best = self.individuals.iter().map(|i| i.length).min().unwrap_or(0);
        let worst = self.individuals.iter().map(|i| i.length).max().unwrap_or(0);
        let total: u128 = self.individuals.iter().map(|i| i.length as u128).sum();
        let mean = total as f64 / self.individuals.len() as f64;
        (best, mean, worst)
    }
}

#[cfg(feature = "parallel")]
fn evaluate_all(paths: Vec<Path>, matrix: &DistanceMatrix) -> Vec<Individual> {
    paths
        .into_par_iter()
        .map(|path| Individual::evaluate(path, matrix))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(paths: Vec<Path>, matrix: &DistanceMatrix) -> Vec<Individual> {
    paths
        .into_iter()
        .map(|path| Individual::evaluate(path, matrix))
        .collect()
}
