//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Split the iteration budget evenly across `workers` threads
//! 2. Each worker, independently:
//!    a. Generate a random starting path and an empty tabu memory
//!    b. Scan the swap neighborhood for the best non-tabu move
//!    c. If one exists: apply it, make it tabu, update the worker's best
//!    d. If every move is tabu (stuck): clear the memory and carry on
//! 3. Join all workers and keep the shortest reported path
//!
//! Workers share nothing but the read-only matrix and, in
//! [`RngMode::Shared`](crate::random::RngMode::Shared), the locked random
//! source.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use rand::Rng;
use tracing::{debug, debug_span, info, info_span, trace, warn};

use crate::error::{Result, SalesmanError};
use crate::matrix::DistanceMatrix;
use crate::partition::split_count;
use crate::path::Path;
use crate::random::RandomSource;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::neighborhood::best_move_parallel;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best path found by any worker.
    pub best: Path,
    /// Length of the best path.
    pub best_length: u64,
    /// Iterations executed, summed over workers.
    pub iterations: usize,
    /// Tabu memory resets, summed over workers.
    pub resets: usize,
    /// Index of the worker that reported `best`.
    pub best_worker: usize,
    /// Best length reported by each worker, by worker index.
    pub worker_lengths: Vec<u64>,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// What one worker hands back after its budget is spent.
#[derive(Debug)]
struct WorkerOutcome {
    best: Path,
    best_length: u64,
    iterations: usize,
    resets: usize,
    cancelled: bool,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on `matrix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_salesman::DistanceMatrix;
    /// use u_salesman::tabu::{TabuConfig, TabuRunner};
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![
    ///     vec![0, 10, 15, 20],
    ///     vec![10, 0, 35, 25],
    ///     vec![15, 35, 0, 30],
    ///     vec![20, 25, 30, 0],
    /// ]).unwrap();
    /// let result = TabuRunner::run(&matrix, &TabuConfig::default().with_seed(42)).unwrap();
    /// assert_eq!(result.best_length, 80);
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &TabuConfig) -> Result<TabuResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs Tabu Search with an optional cancellation token.
    ///
    /// Each worker checks the flag before every iteration. A cancelled run
    /// still returns the best path found so far.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult> {
        config.validate().map_err(SalesmanError::InvalidConfig)?;

        let span = info_span!("tabu_search", nodes = matrix.len(), workers = config.workers);
        let _enter = span.enter();

        let source = RandomSource::new(config.rng_mode, config.seed);
        debug!(seed = source.seed(), mode = ?source.mode(), "random source ready");
        let budgets = split_count(config.max_iterations, config.workers);
        let cancel = cancel.as_deref();

        let outcomes: Vec<WorkerOutcome> = thread::scope(|s| {
            let handles: Vec<_> = budgets
                .iter()
                .enumerate()
                .map(|(id, &budget)| {
                    let source = &source;
                    s.spawn(move || {
                        let mut rng = source.stream(id as u64);
                        run_worker(id, matrix, config, budget, &mut rng, cancel)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
                .collect()
        });

        let worker_lengths: Vec<u64> = outcomes.iter().map(|o| o.best_length).collect();
        let iterations = outcomes.iter().map(|o| o.iterations).sum();
        let resets = outcomes.iter().map(|o| o.resets).sum();
        let cancelled = outcomes.iter().any(|o| o.cancelled);

        // min_by_key keeps the first of equal minima, i.e. the lowest worker.
        let (best_worker, best_length) = worker_lengths
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, length)| length)
            .ok_or_else(|| SalesmanError::InvalidConfig("no workers were started".into()))?;
        let best = outcomes
            .into_iter()
            .nth(best_worker)
            .map(|o| o.best)
            .ok_or_else(|| SalesmanError::InvalidConfig("no workers were started".into()))?;

        if cancelled {
            warn!(iterations, "tabu search cancelled");
        }
        info!(best_length, best_worker, iterations, resets, "tabu search finished");

        Ok(TabuResult {
            best,
            best_length,
            iterations,
            resets,
            best_worker,
            worker_lengths,
            cancelled,
        })
    }
}

/// One worker's SEARCHING/STUCK loop over its share of the budget.
fn run_worker<R: Rng>(
    id: usize,
    matrix: &DistanceMatrix,
    config: &TabuConfig,
    budget: usize,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> WorkerOutcome {
    let _span = debug_span!("tabu_worker", worker = id).entered();

    let mut current = Path::random(matrix.len(), rng);
    let mut memory = TabuMemory::new(config.tabu_capacity);
    let mut best = current.clone();
    let mut best_length = current.length(matrix);

    let mut iterations = 0;
    let mut resets = 0;
    let mut cancelled = false;

    while iterations < budget {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }
        iterations += 1;

        match best_move_parallel(matrix, &current, &memory, config.neighborhood_workers) {
            Some(scored) => {
                scored.mv.apply(current.nodes_mut());
                memory.insert(scored.mv);
                debug_assert_eq!(scored.length, current.length(matrix));

                if scored.length < best_length {
                    best_length = scored.length;
                    best = current.clone();
                }
            }
            None => {
                trace!(iteration = iterations, "neighborhood fully tabu, clearing memory");
                memory.clear();
                resets += 1;
            }
        }
    }

    debug!(best_length, iterations, resets, "tabu worker finished");

    WorkerOutcome {
        best,
        best_length,
        iterations,
        resets,
        cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, RngMode};
    use crate::testing::{four_node, is_valid_permutation, random_symmetric, two_node};

    #[test]
    fn test_tabu_four_node_finds_optimum() {
        let m = four_node();
        let config = TabuConfig::default().with_seed(42);
        let result = TabuRunner::run(&m, &config).unwrap();

        assert_eq!(result.best_length, 80);
        assert_eq!(result.best.length(&m), 80);
        assert_eq!(result.best[0], 0);
        // 0,1,3,2 or its reflection 0,2,3,1
        assert!(
            result.best[..] == [0, 1, 3, 2] || result.best[..] == [0, 2, 3, 1],
            "unexpected optimal cycle {:?}",
            result.best
        );
    }

    #[test]
    fn test_tabu_two_nodes() {
        let m = two_node();
        for seed in 0..5 {
            let config = TabuConfig::default().with_seed(seed);
            let result = TabuRunner::run(&m, &config).unwrap();
            assert_eq!(result.best.clone().into_nodes(), vec![0, 1]);
            assert_eq!(result.best_length, 10);
            // Every iteration finds an empty neighborhood and resets.
            assert_eq!(result.resets, result.iterations);
        }
    }

    #[test]
    fn test_tabu_three_nodes_recovers_from_full_tabu() {
        let m = DistanceMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]])
            .unwrap();
        let config = TabuConfig::default()
            .with_max_iterations(50)
            .with_workers(1)
            .with_seed(1);
        let result = TabuRunner::run(&m, &config).unwrap();

        assert_eq!(result.iterations, 50);
        // One legal move, then one reset, alternating.
        assert_eq!(result.resets, 25);
        assert_eq!(result.best_length, 6);
    }

    #[test]
    fn test_tabu_budget_split_across_workers() {
        let m = four_node();
        let config = TabuConfig::default()
            .with_max_iterations(103)
            .with_workers(5)
            .with_seed(7);
        let result = TabuRunner::run(&m, &config).unwrap();

        assert_eq!(result.iterations, 103);
        assert_eq!(result.worker_lengths.len(), 5);
        assert_eq!(
            result.best_length,
            *result.worker_lengths.iter().min().unwrap()
        );
        assert_eq!(result.worker_lengths[result.best_worker], result.best_length);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_tabu_beats_random_paths() {
        let m = random_symmetric(12, 3);
        let config = TabuConfig::default()
            .with_max_iterations(200)
            .with_seed(3);
        let result = TabuRunner::run(&m, &config).unwrap();

        assert!(is_valid_permutation(&result.best, 12));
        assert_eq!(result.best.length(&m), result.best_length);

        let mut rng = create_rng(99);
        let samples = 200;
        let mean = (0..samples)
            .map(|_| Path::random(12, &mut rng).length(&m))
            .sum::<u64>()
            / samples;
        assert!(
            result.best_length < mean,
            "tabu result {} should beat the random mean {}",
            result.best_length,
            mean
        );
    }

    #[test]
    fn test_tabu_per_worker_rng_is_reproducible() {
        let m = random_symmetric(10, 11);
        let config = TabuConfig::default()
            .with_max_iterations(100)
            .with_rng_mode(RngMode::PerWorker)
            .with_seed(5);

        let a = TabuRunner::run(&m, &config).unwrap();
        let b = TabuRunner::run(&m, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.worker_lengths, b.worker_lengths);
    }

    #[test]
    fn test_tabu_cancelled_before_start() {
        let m = random_symmetric(8, 1);
        let cancel = Arc::new(AtomicBool::new(true));
        let config = TabuConfig::default().with_seed(1);
        let result = TabuRunner::run_with_cancel(&m, &config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert!(is_valid_permutation(&result.best, 8));
        assert_eq!(result.best.length(&m), result.best_length);
    }

    #[test]
    fn test_tabu_invalid_config() {
        let m = four_node();
        let config = TabuConfig::default().with_tabu_capacity(0);
        assert!(matches!(
            TabuRunner::run(&m, &config),
            Err(SalesmanError::InvalidConfig(_))
        ));
    }
}
