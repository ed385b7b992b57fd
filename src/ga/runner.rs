//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → elitism → parallel breeding → mutation → sort → repeat.
//!
//! # Threading
//!
//! Each generation the non-elite slots of the next-generation buffer are
//! partitioned into contiguous chunks, one per breeding thread. Threads
//! read the (sorted, immutable) current population and write only their
//! own chunk. Sorting and mutation run on the calling thread between
//! generations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use rand::Rng;
use tracing::{debug, debug_span, info, info_span, warn};

use crate::error::{Result, SalesmanError};
use crate::matrix::DistanceMatrix;
use crate::partition::partition;
use crate::path::Path;
use crate::random::RandomSource;

use super::config::GaConfig;
use super::operators::{anchored_swap_mutation, crossover};
use super::population::Population;
use super::types::Individual;

/// Population statistics for one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,
    /// Shortest length in the population.
    pub best_length: u64,
    /// Mean length over the population.
    pub mean_length: f64,
    /// Longest length in the population.
    pub worst_length: u64,
    /// Shortest length seen so far in the run.
    pub all_time_best: u64,
}

impl GenerationStats {
    fn measure(generation: usize, population: &Population, all_time_best: u64) -> Self {
        let (best_length, mean_length, worst_length) = population.length_summary();
        Self {
            generation,
            best_length,
            mean_length,
            worst_length,
            all_time_best,
        }
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The shortest path seen during the entire run.
    pub best: Path,

    /// Length of `best`.
    pub best_length: u64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// All-time best length after initialization and after each generation.
    pub length_history: Vec<u64>,

    /// Population statistics, same indexing as `length_history`.
    pub stats: Vec<GenerationStats>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_salesman::DistanceMatrix;
/// use u_salesman::ga::{GaConfig, GaRunner};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
/// let config = GaConfig::default().with_max_generations(10).with_seed(42);
/// let result = GaRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.best_length, 80);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Fails with [`SalesmanError::InvalidConfig`] if `config` does not
    /// validate.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked before each generation. A cancelled run returns
    /// the best path found so far.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate().map_err(SalesmanError::InvalidConfig)?;

        let span = info_span!(
            "genetic_search",
            nodes = matrix.len(),
            population = config.population_size,
            workers = config.workers
        );
        let _enter = span.enter();

        let source = RandomSource::new(config.rng_mode, config.seed);
        debug!(seed = source.seed(), mode = ?source.mode(), "random source ready");
        let mut rng = source.stream(0);

        // 1. Initialize, evaluate and sort
        let mut population = Population::random(config.population_size, matrix, &mut rng);
        population.sort();

        let mut best = population.best().clone();
        let mut length_history = Vec::with_capacity(config.max_generations + 1);
        let mut stats = Vec::with_capacity(config.max_generations + 1);
        length_history.push(best.length);
        stats.push(GenerationStats::measure(0, &population, best.length));

        let elites = config.elite_count;
        let protected = if config.protect_elites { elites } else { 0 };
        let mutations = config.mutation_count();
        let mut next: Vec<Individual> = population.individuals().to_vec();
        let mut generations = 0;
        let mut cancelled = false;

        // 2. Generational loop
        for gen in 0..config.max_generations {
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }
            let _gen_span = debug_span!("generation", generation = gen + 1).entered();

            // Elitism
            next[..elites].clone_from_slice(&population.individuals()[..elites]);

            // Breed the rest in parallel
            breed(
                matrix,
                config,
                population.individuals(),
                &mut next[elites..],
                &source,
                gen,
            );

            mutate(matrix, &mut next[protected..], mutations, &mut rng);

            population.replace_with(&mut next);
            population.sort();

            let gen_best = population.best();
            if gen_best.length < best.length {
                best = gen_best.clone();
            }
            generations = gen + 1;

            length_history.push(best.length);
            let gen_stats = GenerationStats::measure(generations, &population, best.length);
            debug!(
                population_best = gen_stats.best_length,
                mean = gen_stats.mean_length,
                best_length = best.length,
                "generation complete"
            );
            stats.push(gen_stats);
        }

        if cancelled {
            warn!(generations, "genetic search cancelled");
        }
        info!(best_length = best.length, generations, "genetic search finished");

        Ok(GaResult {
            best_length: best.length,
            best: best.path,
            generations,
            cancelled,
            length_history,
            stats,
        })
    }
}

/// Fills `slots` with children of `parents`, one thread per chunk.
fn breed(
    matrix: &DistanceMatrix,
    config: &GaConfig,
    parents: &[Individual],
    slots: &mut [Individual],
    source: &RandomSource,
    generation: usize,
) {
    let chunks = partition(0..slots.len(), config.workers);

    // Carve disjoint chunks so each thread owns its slice exclusively.
    let mut rest = slots;
    let mut owned = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let (mine, tail) = std::mem::take(&mut rest).split_at_mut(chunk.len());
        owned.push(mine);
        rest = tail;
    }

    thread::scope(|s| {
        let handles: Vec<_> = owned
            .into_iter()
            .enumerate()
            .map(|(worker, mine)| {
                let stream = 1 + (generation * config.workers + worker) as u64;
                s.spawn(move || {
                    let mut rng = source.stream(stream);
                    for slot in mine.iter_mut() {
                        let (a, b) = config.selection.select_parents(parents, &mut rng);
                        let child = crossover(&parents[a].path, &parents[b].path, &mut rng);
                        *slot = Individual::evaluate(child, matrix);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        }
    });
}

/// Applies `count` anchored swaps to randomly chosen members of `slots`.
///
/// The same member may be drawn more than once.
fn mutate<R: Rng>(matrix: &DistanceMatrix, slots: &mut [Individual], count: usize, rng: &mut R) {
    if slots.is_empty() {
        return;
    }
    for _ in 0..count {
        let target = &mut slots[rng.random_range(0..slots.len())];
        anchored_swap_mutation(target.path.nodes_mut(), rng);
        target.reevaluate(matrix);
    }
}

// ============================================================================
// Tests
// ============================================================================
