//! Game session management for interactive sliding-tile shells.
//!
//! A rendering shell owns display and input; this crate owns the rules.
//! [`Game`] holds the single current state, validates tap moves by blank
//! adjacency, counts moves, shuffles via the puzzle generator, and hands
//! out solver paths as [`Replay`] iterators for fixed-delay animation.

pub mod game;

pub use self::game::{Game, GameError, Replay, TapOutcome};
