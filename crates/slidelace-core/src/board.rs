//! Board instances: goal layout, goal-position lookup, and solvability.

use std::fmt;

use derive_more::{Display, Error};

use crate::State;

/// An immutable `n`×`n` board instance.
///
/// Holds the board size, the canonical goal arrangement
/// `(1, 2, …, n²-1, 0)`, and a lookup table mapping each tile value to its
/// goal coordinate. A board carries no per-call state, so one instance can
/// back any number of solve, generate, and check calls, including from
/// multiple threads.
///
/// # Examples
///
/// ```
/// use slidelace_core::Board;
///
/// let board = Board::new(3)?;
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.cells(), 9);
/// assert_eq!(board.goal_position(1), (0, 0));
/// assert_eq!(board.goal_position(0), (2, 2));
/// # Ok::<(), slidelace_core::InvalidSizeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    goal: State,
    goal_positions: Box<[(usize, usize)]>,
}

impl Board {
    /// Largest supported board size.
    ///
    /// Tiles are stored as `u16`, so cell values must fit in `0..=65535`.
    /// The bound is purely representational; A* cannot finish on boards
    /// anywhere near it.
    pub const MAX_SIZE: usize = 255;

    /// Creates a board instance for the given size.
    ///
    /// The goal state and goal-position table are computed once here and
    /// never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `size < 2` or
    /// `size > `[`Board::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        if size < 2 {
            return Err(InvalidSizeError::TooSmall { size });
        }
        if size > Self::MAX_SIZE {
            return Err(InvalidSizeError::TooLarge { size });
        }

        let cells = size * size;
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (1..cells)
            .map(|value| value as u16)
            .chain([0])
            .collect::<Vec<_>>();
        let goal = State::from_tiles_unchecked(tiles);

        let goal_positions = (0..cells)
            .map(|value| {
                if value == 0 {
                    (size - 1, size - 1)
                } else {
                    ((value - 1) / size, (value - 1) % size)
                }
            })
            .collect();

        Ok(Self {
            size,
            goal,
            goal_positions,
        })
    }

    /// Returns the board size `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells, `n²`.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    /// Returns the goal arrangement for this board.
    #[must_use]
    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Returns the `(row, col)` goal coordinate of a tile value.
    ///
    /// The blank maps to the bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics if `tile` is not a value of this board.
    #[must_use]
    pub fn goal_position(&self, tile: u16) -> (usize, usize) {
        self.goal_positions[usize::from(tile)]
    }

    /// Converts a flat row-major index into a `(row, col)` coordinate.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Converts a `(row, col)` coordinate into a flat row-major index.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Validates a tile sequence against this board and wraps it in a
    /// [`State`].
    ///
    /// Convenience for boundary layers; equivalent to
    /// [`State::new`]`(self.size(), tiles)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ValidationError`] if `tiles` is not a permutation
    /// of `0..n²-1`.
    pub fn state_from_tiles(&self, tiles: Vec<u16>) -> Result<State, crate::ValidationError> {
        State::new(self.size, tiles)
    }

    /// Decides, without searching, whether `state` can reach the goal.
    ///
    /// Counts inversions — pairs of non-blank tiles out of their goal
    /// relative order in the row-major scan. For odd `n` the state is
    /// solvable iff the inversion count is even; for even `n` it is
    /// solvable iff the inversion count plus the blank's row index is even.
    /// Blank moves preserve this parity, and it separates the permutation
    /// group into exactly the two reachability classes of the puzzle.
    ///
    /// Runs in O(n⁴); `state` must satisfy the permutation invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::{Board, State};
    ///
    /// let board = Board::new(3)?;
    /// assert!(board.is_solvable(board.goal()));
    ///
    /// let twisted = State::new(3, vec![2, 1, 3, 4, 5, 6, 7, 8, 0])?;
    /// assert!(!board.is_solvable(&twisted));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn is_solvable(&self, state: &State) -> bool {
        let tiles = state.tiles();
        let inversions: usize = tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum();

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (blank_row, _) = self.coordinate(state.blank_index());
            (inversions + blank_row) % 2 == 0
        }
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering `state` as a
    /// grid, with the blank shown as `.`.
    ///
    /// ```
    /// use slidelace_core::Board;
    ///
    /// let board = Board::new(2)?;
    /// assert_eq!(board.display(board.goal()).to_string(), "1 2\n3 .");
    /// # Ok::<(), slidelace_core::InvalidSizeError>(())
    /// ```
    #[must_use]
    pub fn display<'a>(&'a self, state: &'a State) -> StateDisplay<'a> {
        StateDisplay { board: self, state }
    }
}

/// Renders a [`State`] as an aligned grid. Created by [`Board::display`].
#[derive(Debug, Clone, Copy)]
pub struct StateDisplay<'a> {
    board: &'a Board,
    state: &'a State,
}

impl fmt::Display for StateDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();
        let width = (self.board.cells() - 1).to_string().len();
        for row in 0..size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let value = self.state.tiles()[self.board.index(row, col)];
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

/// The requested board size is outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidSizeError {
    /// Boards smaller than 2×2 have no moves to search over.
    #[display("board size must be at least 2, got {size}")]
    TooSmall {
        /// The rejected size.
        size: usize,
    },
    /// Cell values would not fit the tile representation.
    #[display("board size must be at most 255, got {size}")]
    TooLarge {
        /// The rejected size.
        size: usize,
    },
}
