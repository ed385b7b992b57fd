//! Tabu Search (TS).
//!
//! Several independent workers each run a swap-neighborhood tabu search
//! from their own random starting path. The neighborhood scan itself can be
//! split across threads. The shortest path reported by any worker wins.
//!
//! # Key Types
//!
//! - [`TabuConfig`]: budget, tabu capacity, thread counts
//! - [`TabuMemory`]: per-worker ring buffer of forbidden [`SwapMove`]s
//! - [`TabuRunner`]: launches workers and aggregates a [`TabuResult`]
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
pub mod neighborhood;
mod runner;
mod types;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::{TabuResult, TabuRunner};
pub use types::{ScoredMove, SwapMove};
