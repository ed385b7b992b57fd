//! Multi-threaded metaheuristic solvers for the symmetric Traveling
//! Salesman Problem.
//!
//! Two independent engines search for a short Hamiltonian cycle through a
//! [`DistanceMatrix`]:
//!
//! - **Genetic Algorithm (GA)**: generational evolution with elitism,
//!   order crossover bred on several threads, and anchored swap mutation.
//! - **Tabu Search (TS)**: several workers, each running a swap-neighborhood
//!   search with a fixed-capacity tabu memory from its own random start.
//!
//! Both report a single best [`Path`]. Every path keeps node 0 at position
//! 0, which removes rotations of the same cycle from the search space.
//!
//! # Quick start
//!
//! ```
//! use u_salesman::DistanceMatrix;
//! use u_salesman::tabu::{TabuConfig, TabuRunner};
//!
//! let matrix = DistanceMatrix::parse("0 10 15 20\n10 0 35 25\n15 35 0 30\n20 25 30 0")?;
//! let result = TabuRunner::run(&matrix, &TabuConfig::default().with_seed(7))?;
//! assert_eq!(result.best_length, 80);
//! # Ok::<(), u_salesman::SalesmanError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): rayon-backed population evaluation and sorting
//! - `serde`: `Serialize`/`Deserialize` for configs, paths and results
//! - `cli` (default): the `u-salesman` binary

pub mod engine;
pub mod error;
pub mod ga;
pub mod matrix;
pub mod partition;
pub mod path;
pub mod random;
pub mod tabu;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{GeneticFinder, PathFinder, TabuFinder};
pub use error::{Result, SalesmanError};
pub use matrix::DistanceMatrix;
pub use path::Path;
