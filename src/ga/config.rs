//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::random::RngMode;

use super::selection::Selection;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_salesman::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.elite_count, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_salesman::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_selection(Selection::Tournament(5))
///     .with_elite_count(2)
///     .with_mutation_rate(0.02);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Shortest individuals copied unchanged into the next generation.
    pub elite_count: usize,

    /// Exempt elite slots from mutation.
    ///
    /// Off by default: mutation targets the whole new generation, so the
    /// population best may regress while the all-time best cannot.
    pub protect_elites: bool,

    /// Fraction of the population mutated each generation (0.0–1.0).
    ///
    /// `floor(population_size * mutation_rate)` individuals receive one
    /// anchored swap.
    pub mutation_rate: f64,

    /// Threads breeding the non-elite slots.
    pub workers: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// How breeding threads draw random numbers.
    pub rng_mode: RngMode,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 100,
            elite_count: 1,
            protect_elites: false,
            mutation_rate: 0.01,
            workers: 5,
            selection: Selection::default(),
            rng_mode: RngMode::Shared,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets whether elite slots are exempt from mutation.
    pub fn with_protect_elites(mut self, protect: bool) -> Self {
        self.protect_elites = protect;
        self
    }

    /// Sets the mutated fraction.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of breeding threads.
    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the random-number policy.
    pub fn with_rng_mode(mut self, mode: RngMode) -> Self {
        self.rng_mode = mode;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of individuals mutated per generation.
    pub fn mutation_count(&self) -> usize {
        (self.population_size as f64 * self.mutation_rate) as usize
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must be smaller than population_size".into());
        }
        if self.workers == 0 {
            return Err("workers must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        if let Selection::Tournament(k) = self.selection {
            if k < 2 {
                return Err("tournament size must be at least 2".into());
            }
        }
        Ok(())
    }
}
