//! Random generation of guaranteed-solvable sliding-tile puzzles.
//!
//! [`PuzzleGenerator`] draws uniformly random permutations of `0..n²-1`
//! and accepts the first one the solvability checker admits. Half of all
//! permutations are solvable, so the expected number of draws is about
//! two and no iteration cap is needed.
//!
//! Every puzzle carries a [`PuzzleSeed`] that reproduces it exactly, so
//! interesting instances can be shared as a 64-character hex string.
//!
//! # Examples
//!
//! ```
//! use slidelace_core::Board;
//! use slidelace_generator::PuzzleGenerator;
//!
//! let board = Board::new(4)?;
//! let generator = PuzzleGenerator::new(&board);
//!
//! let puzzle = generator.generate();
//! assert!(board.is_solvable(&puzzle.start));
//!
//! // The seed reproduces the same start state.
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again.start, puzzle.start);
//! # Ok::<(), slidelace_core::InvalidSizeError>(())
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
