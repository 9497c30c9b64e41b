//! Core data structures for sliding-tile (N-puzzle) applications.
//!
//! This crate provides the board and state model shared by the solving,
//! generation, game, and service crates:
//!
//! - [`State`]: an immutable puzzle configuration, always a permutation of
//!   `0..n²-1` with `0` as the blank. Compared and hashed by full content so
//!   it can serve as a map or set key in search tables.
//! - [`Board`]: a per-size immutable instance holding the canonical goal
//!   arrangement and a goal-position lookup table. Also hosts the
//!   closed-form [solvability checker](Board::is_solvable).
//!
//! # Examples
//!
//! ```
//! use slidelace_core::{Board, State};
//!
//! let board = Board::new(3)?;
//!
//! // The goal places tiles in ascending order with the blank last.
//! assert_eq!(board.goal().tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
//!
//! // One blank swap away from the goal: still solvable.
//! let state = State::new(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8])?;
//! assert!(board.is_solvable(&state));
//!
//! // A single transposition of two tiles flips the parity.
//! let twisted = State::new(3, vec![2, 1, 3, 4, 5, 6, 7, 8, 0])?;
//! assert!(!board.is_solvable(&twisted));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod state;

pub use self::{
    board::{Board, InvalidSizeError, StateDisplay},
    state::{State, ValidationError},
};
