//! Tabu Search configuration.

use crate::random::RngMode;

/// Configuration parameters for the multi-threaded Tabu Search.
///
/// # Examples
///
/// ```
/// use u_salesman::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_capacity(7)
///     .with_workers(4);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_capacity, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Total iteration budget, split evenly across workers.
    pub max_iterations: usize,
    /// How many recent moves each worker keeps tabu.
    pub tabu_capacity: usize,
    /// Number of independent search workers.
    pub workers: usize,
    /// Threads used by each worker to scan its neighborhood.
    pub neighborhood_workers: usize,
    /// How workers draw random numbers.
    pub rng_mode: RngMode,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_capacity: 7,
            workers: 5,
            neighborhood_workers: 5,
            rng_mode: RngMode::Shared,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the total iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the number of search workers.
    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    /// Sets the number of neighborhood-scan threads per worker.
    pub fn with_neighborhood_workers(mut self, n: usize) -> Self {
        self.neighborhood_workers = n;
        self
    }

    /// Sets the random-number policy.
    pub fn with_rng_mode(mut self, mode: RngMode) -> Self {
        self.rng_mode = mode;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.tabu_capacity == 0 {
            return Err("tabu_capacity must be at least 1".into());
        }
        if self.workers == 0 {
            return Err("workers must be at least 1".into());
        }
        if self.neighborhood_workers == 0 {
            return Err("neighborhood_workers must be at least 1".into());
        }
        if self.max_iterations < self.workers {
            return Err("max_iterations must be at least the number of workers".into());
        }
        Ok(())
    }
}
