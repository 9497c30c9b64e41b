//! Puzzle state representation and boundary validation.

use derive_more::{Display, Error};

/// A puzzle configuration: a permutation of `0..n²-1` read row-major.
///
/// The value `0` denotes the blank. States are immutable value objects;
/// equality and hashing cover the full tile sequence, which makes `State`
/// usable as a key in the solver's search tables.
///
/// The permutation invariant (exactly one blank, no duplicates, no
/// omissions) is enforced by [`State::new`]. Trusted producers that derive
/// a state from an already-valid one (move generation, puzzle shuffling)
/// use [`State::from_tiles_unchecked`] instead.
///
/// # Examples
///
/// ```
/// use slidelace_core::{State, ValidationError};
///
/// let state = State::new(2, vec![1, 2, 3, 0])?;
/// assert_eq!(state.tiles(), &[1, 2, 3, 0]);
/// assert_eq!(state.blank_index(), 3);
///
/// let err = State::new(2, vec![1, 2, 3, 3]).unwrap_err();
/// assert_eq!(err, ValidationError::Duplicate { value: 3 });
/// # Ok::<(), ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct State {
    tiles: Box<[u16]>,
}

impl State {
    /// Creates a state for an `size`×`size` board, validating the
    /// permutation invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongLength`] if `tiles` does not hold
    /// exactly `size²` values, [`ValidationError::OutOfRange`] if a value
    /// does not fit in `0..size²`, and [`ValidationError::Duplicate`] if a
    /// value appears more than once. A valid length with distinct in-range
    /// values necessarily contains the blank.
    pub fn new(size: usize, tiles: Vec<u16>) -> Result<Self, ValidationError> {
        let cells = size * size;
        if tiles.len() != cells {
            return Err(ValidationError::WrongLength {
                expected: cells,
                actual: tiles.len(),
            });
        }
        let mut seen = vec![false; cells];
        for &value in &tiles {
            let Some(slot) = seen.get_mut(usize::from(value)) else {
                return Err(ValidationError::OutOfRange { value, cells });
            };
            if *slot {
                return Err(ValidationError::Duplicate { value });
            }
            *slot = true;
        }
        Ok(Self::from_tiles_unchecked(tiles))
    }

    /// Creates a state without validating the permutation invariant.
    ///
    /// Callers must guarantee that `tiles` is a permutation of `0..n²-1`
    /// for the board it will be used with; every other operation in this
    /// workspace assumes the invariant holds.
    #[must_use]
    pub fn from_tiles_unchecked(tiles: impl Into<Box<[u16]>>) -> Self {
        Self {
            tiles: tiles.into(),
        }
    }

    /// Returns the tile values in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Returns the flat index of the blank.
    ///
    /// # Panics
    ///
    /// Panics if the state violates the permutation invariant and holds no
    /// blank.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("state holds exactly one blank")
    }

    /// Consumes the state and returns its tiles.
    #[must_use]
    pub fn into_tiles(self) -> Box<[u16]> {
        self.tiles
    }
}

/// A supplied tile sequence is not a permutation of `0..n²-1`.
///
/// Raised at the boundary before the core is invoked; solver, generator,
/// and game operations assume already-validated states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// The sequence length does not match the board's cell count.
    #[display("expected {expected} tiles, got {actual}")]
    WrongLength {
        /// Expected number of tiles (`n²`).
        expected: usize,
        /// Number of tiles supplied.
        actual: usize,
    },
    /// A value does not fit in `0..n²`.
    #[display("tile value {value} is out of range for {cells} cells")]
    OutOfRange {
        /// The offending value.
        value: u16,
        /// The board's cell count.
        cells: usize,
    },
    /// A value appears more than once.
    #[display("tile value {value} appears more than once")]
    Duplicate {
        /// The duplicated value.
        value: u16,
    },
}
