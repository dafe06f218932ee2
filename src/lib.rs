//! ACO N-Queens Solver Library
//!
//! An Ant Colony Optimization metaheuristic for the N-queens
//! constraint-satisfaction problem: place N queens on an N x N board, one per
//! column, such that no two share a row or a diagonal.
//!
//! # Features
//!
//! - Pheromone-guided probabilistic construction with a conflict-count
//!   heuristic (no distance graph involved)
//! - Deterministic, seedable runs (ChaCha8 RNG)
//! - Early return with a `solved` flag when a conflict-free board is found
//! - Seed-sweep benchmarking with CSV/report export
//! - SVG/PNG board visualization
//!
//! # Example
//!
//! ```no_run
//! use nqueens_aco_solver::optimizer::{AcoConfig, AntColonyOptimizer};
//!
//! let config = AcoConfig {
//!     dim: 8,
//!     num_ants: 200,
//!     max_iterations: 50,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut optimizer = AntColonyOptimizer::new(config).unwrap();
//! let placement = optimizer.run().unwrap();
//!
//! println!("{}", placement.render_grid());
//! println!("Fitness: {} (solved: {})", placement.fitness, placement.solved);
//! ```

pub mod benchmark;
pub mod board;
pub mod colony;
pub mod conflicts;
pub mod error;
pub mod optimizer;
pub mod pheromone;
pub mod visualization;

pub use board::Placement;
pub use error::AcoError;
pub use optimizer::{AcoConfig, AntColonyOptimizer};
