//! Optimal solving for sliding-tile puzzles.
//!
//! This crate layers the algorithmic pieces on top of
//! [`slidelace_core`]'s board model:
//!
//! - [`manhattan`]: the admissible, consistent heuristic estimator.
//! - [`neighbors`]: the move generator enumerating legal blank swaps.
//! - [`Solver`]: best-first (A*) search producing a provably shortest path
//!   together with [`SearchStats`].
//!
//! # Examples
//!
//! ```
//! use slidelace_core::{Board, State};
//! use slidelace_solver::Solver;
//!
//! let board = Board::new(3)?;
//! let start = State::new(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8])?;
//!
//! let outcome = Solver::new(&board).solve(&start);
//! let path = outcome.path.expect("a solvable start always yields a path");
//! assert_eq!(path.len(), 2);
//! assert_eq!(outcome.stats.steps(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod astar;
pub mod heuristic;
pub mod moves;

pub use self::{
    astar::{SearchStats, SolveOutcome, Solver},
    heuristic::manhattan,
    moves::neighbors,
};
