//! Parent selection policies.
//!
//! Every policy returns two **distinct** population indices and biases
//! toward shorter paths, either explicitly (tournament) or by relying on
//! the population being sorted (fitter half).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use super::types::Individual;

/// Strategy for choosing the two parents of each child.
///
/// # Examples
///
/// ```
/// use u_salesman::ga::Selection;
///
/// // Sample 10 distinct individuals, breed the two shortest.
/// let sel = Selection::Tournament(10);
/// assert_eq!(sel, Selection::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw `k` distinct individuals uniformly, pick the two shortest.
    ///
    /// `k` is clamped to `2..=population size`. Higher `k` = stronger
    /// selection pressure.
    ///
    /// # Complexity
    /// O(k²) draws-and-checks plus O(k log k) sort per selection
    Tournament(usize),

    /// Two distinct individuals drawn uniformly from the first half of the
    /// population. Assumes the population is sorted.
    FitterHalf,

    /// Two distinct individuals drawn uniformly from the whole population.
    /// No selection pressure; useful as a baseline.
    Uniform,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(10)
    }
}

impl Selection {
    /// Selects two distinct parent indices.
    ///
    /// # Panics
    /// Panics if `population` has fewer than two members.
    pub fn select_parents<R: Rng>(&self, population: &[Individual], rng: &mut R) -> (usize, usize) {
        assert!(
            population.len() >= 2,
            "cannot select two parents from fewer than two individuals"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::FitterHalf => distinct_pair((population.len() / 2).max(2), rng),
            Selection::Uniform => distinct_pair(population.len(), rng),
        }
    }
}

/// Samples `k` distinct indices, returns the two shortest (draw order
/// breaks ties).
fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> (usize, usize) {
    let n = population.len();
    let k = k.clamp(2, n);

    let mut sample = Vec::with_capacity(k);
    while sample.len() < k {
        let idx = rng.random_range(0..n);
        if !sample.contains(&idx) {
            sample.push(idx);
        }
    }
    sample.sort_by_key(|&idx| population[idx].length);
    (sample[0], sample[1])
}

/// Two distinct indices from `0..bound`.
fn distinct_pair<R: Rng>(bound: usize, rng: &mut R) -> (usize, usize) {
    let first = rng.random_range(0..bound);
    let mut second = rng.random_range(0..bound);
    while second == first {
        second = rng.random_range(0..bound);
    }
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use crate::random::create_rng;

    fn make_population(lengths: &[u64]) -> Vec<Individual> {
        lengths
            .iter()
            .map(|&length| Individual {
                path: Path::identity(3),
                length,
            })
            .collect()
    }

    #[test]
    fn test_parents_always_distinct() {
        let pop = make_population(&[5, 5, 5, 5, 5]);
        let mut rng = create_rng(42);
        for selection in [Selection::Tournament(3), Selection::FitterHalf, Selection::Uniform] {
            for _ in 0..1000 {
                let (a, b) = selection.select_parents(&pop, &mut rng);
                assert_ne!(a, b, "{selection:?} returned identical parents");
            }
        }
    }

    #[test]
    fn test_tournament_full_size_picks_two_best() {
        let pop = make_population(&[100, 50, 1, 80, 20]);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let (a, b) = Selection::Tournament(5).select_parents(&pop, &mut rng);
            assert_eq!((a, b), (2, 4));
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10, 5, 1, 8, 12, 15, 9, 11]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 8];
        let n = 10_000;
        for _ in 0..n {
            let (a, _) = Selection::Tournament(4).select_parents(&pop, &mut rng);
            counts[a] += 1;
        }
        // Index 2 (length 1) wins whenever it is sampled: P = 4/8.
        let best_count = counts[2];
        assert!(
            best_count > 4000,
            "expected best to be selected ~50% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_tournament_clamps_size() {
        let pop = make_population(&[3, 1]);
        let mut rng = create_rng(1);
        assert_eq!(Selection::Tournament(10).select_parents(&pop, &mut rng), (1, 0));
        let (a, b) = Selection::Tournament(0).select_parents(&pop, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_fitter_half_stays_in_half() {
        let pop = make_population(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            let (a, b) = Selection::FitterHalf.select_parents(&pop, &mut rng);
            assert!(a < 5 && b < 5);
        }
    }

    #[test]
    fn test_fitter_half_small_population() {
        let pop = make_population(&[1, 2, 3]);
        let mut rng = create_rng(7);
        for _ in 0..100 {
            let (a, b) = Selection::FitterHalf.select_parents(&pop, &mut rng);
            assert!(a < 2 && b < 2 && a != b);
        }
    }

    #[test]
    fn test_uniform_covers_population() {
        let pop = make_population(&[10, 5, 1, 8]);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            let (a, b) = Selection::Uniform.select_parents(&pop, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        for &c in &counts {
            assert!(c > 4000, "expected roughly uniform, got counts: {counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "fewer than two individuals")]
    fn test_single_individual_panics() {
        let pop = make_population(&[5]);
        let mut rng = create_rng(42);
        Selection::Uniform.select_parents(&pop, &mut rng);
    }
}
