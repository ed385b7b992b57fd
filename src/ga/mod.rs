//! Genetic Algorithm for the symmetric TSP.
//!
//! A generational GA over anchored permutations: every path starts at
//! node 0, parents are chosen by a [`Selection`] policy, children are
//! bred with order crossover on several threads, and a small fraction of
//! each generation receives an anchored swap mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, elites, threads)
//! - [`Population`] and [`Individual`]: paths paired with their lengths
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final result with per-generation [`GenerationStats`]
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover and anchored swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Potvin (1996), "Genetic Algorithms for the Traveling Salesman Problem"

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::Selection;
pub use types::Individual;
