//! Uniform entry point over both search engines.
//!
//! A [`PathFinder`] is bound to one immutable [`DistanceMatrix`] at
//! [`load`](PathFinder::load) time and can then be asked for its best
//! cycle any number of times. Every call is an independent run.
//!
//! ```
//! use std::sync::Arc;
//! use u_salesman::{DistanceMatrix, PathFinder, TabuFinder};
//! use u_salesman::tabu::TabuConfig;
//!
//! let matrix = Arc::new(DistanceMatrix::parse("0 10 15 20\n10 0 35 25\n15 35 0 30\n20 25 30 0")?);
//! let finder = TabuFinder::load(matrix, TabuConfig::default().with_seed(1))?;
//! let path = finder.find_best_path()?;
//! assert_eq!(finder.path_length(&path), 80);
//! # Ok::<(), u_salesman::SalesmanError>(())
//! ```

use std::sync::Arc;

use crate::error::{Result, SalesmanError};
use crate::ga::{GaConfig, GaResult, GaRunner};
use crate::matrix::DistanceMatrix;
use crate::path::Path;
use crate::tabu::{TabuConfig, TabuResult, TabuRunner};

/// A TSP search engine bound to a distance matrix.
pub trait PathFinder: Sized {
    /// Engine parameters.
    type Config;

    /// Binds an engine to `matrix`, validating `config` up front.
    fn load(matrix: Arc<DistanceMatrix>, config: Self::Config) -> Result<Self>;

    /// Runs a full search and returns the best cycle found.
    fn find_best_path(&self) -> Result<Path>;

    /// The bound matrix.
    fn matrix(&self) -> &DistanceMatrix;

    /// Cycle length of `path` against the bound matrix.
    ///
    /// # Panics
    /// Panics if `path` is empty or names a node outside the matrix.
    fn path_length(&self, path: &[usize]) -> u64 {
        self.matrix().path_length(path)
    }
}

/// [`PathFinder`] backed by the genetic algorithm.
#[derive(Debug, Clone)]
pub struct GeneticFinder {
    matrix: Arc<DistanceMatrix>,
    config: GaConfig,
}

impl GeneticFinder {
    /// The engine parameters.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs a full search and returns the complete result.
    pub fn run(&self) -> Result<GaResult> {
        GaRunner::run(&self.matrix, &self.config)
    }
}

impl PathFinder for GeneticFinder {
    type Config = GaConfig;

    fn load(matrix: Arc<DistanceMatrix>, config: GaConfig) -> Result<Self> {
        config.validate().map_err(SalesmanError::InvalidConfig)?;
        Ok(Self { matrix, config })
    }

    fn find_best_path(&self) -> Result<Path> {
        self.run().map(|result| result.best)
    }

    fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }
}

/// [`PathFinder`] backed by the multi-threaded tabu search.
#[derive(Debug, Clone)]
pub struct TabuFinder {
    matrix: Arc<DistanceMatrix>,
    config: TabuConfig,
}

impl TabuFinder {
    /// The engine parameters.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs a full search and returns the complete result.
    pub fn run(&self) -> Result<TabuResult> {
        TabuRunner::run(&self.matrix, &self.config)
    }
}

impl PathFinder for TabuFinder {
    type Config = TabuConfig;

    fn load(matrix: Arc<DistanceMatrix>, config: TabuConfig) -> Result<Self> {
        config.validate().map_err(SalesmanError::InvalidConfig)?;
        Ok(Self { matrix, config })
    }

    fn find_best_path(&self) -> Result<Path> {
        self.run().map(|result| result.best)
    }

    fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{four_node, is_valid_permutation, random_symmetric};

    fn solve<F: PathFinder>(finder: &F) -> (Path, u64) {
        let path = finder.find_best_path().unwrap();
        let length = finder.path_length(&path);
        (path, length)
    }

    #[test]
    fn test_both_engines_agree_on_four_nodes() {
        let m = Arc::new(four_node());
        let genetic =
            GeneticFinder::load(m.clone(), GaConfig::default().with_max_generations(10).with_seed(2))
                .unwrap();
        let tabu = TabuFinder::load(m, TabuConfig::default().with_seed(2)).unwrap();

        assert_eq!(solve(&genetic).1, 80);
        assert_eq!(solve(&tabu).1, 80);
    }

    #[test]
    fn test_path_length_matches_matrix() {
        let m = Arc::new(four_node());
        let finder = TabuFinder::load(m, TabuConfig::default()).unwrap();
        assert_eq!(finder.path_length(&[0, 1, 2, 3]), 95);
        assert_eq!(finder.path_length(&[0, 1, 3, 2]), 80);
    }

    #[test]
    fn test_repeated_runs_are_independent() {
        let m = Arc::new(random_symmetric(9, 4));
        let finder = GeneticFinder::load(
            m,
            GaConfig::default()
                .with_population_size(30)
                .with_max_generations(5)
                .with_seed(8),
        )
        .unwrap();

        let (first, _) = solve(&finder);
        let (second, _) = solve(&finder);
        assert!(is_valid_permutation(&first, 9));
        assert!(is_valid_permutation(&second, 9));
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let m = Arc::new(four_node());
        assert!(matches!(
            GeneticFinder::load(m.clone(), GaConfig::default().with_workers(0)),
            Err(SalesmanError::InvalidConfig(_))
        ));
        assert!(matches!(
            TabuFinder::load(m, TabuConfig::default().with_workers(0)),
            Err(SalesmanError::InvalidConfig(_))
        ));
    }
}
