//! Legal successor enumeration.

use slidelace_core::{Board, State};
use tinyvec::ArrayVec;

/// Blank displacement per direction, in the fixed emission order
/// up, down, left, right. The order matters downstream: it makes frontier
/// tie-breaking deterministic.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Enumerates every state reachable from `state` by one blank swap.
///
/// Yields between 2 and 4 successors depending on the blank's position
/// (corner, edge, or interior). The input is never mutated; each successor
/// is a fresh value.
///
/// # Examples
///
/// ```
/// use slidelace_core::{Board, State};
/// use slidelace_solver::neighbors;
///
/// let board = Board::new(3)?;
/// // Blank in the interior: all four directions are legal.
/// let state = State::new(3, vec![1, 2, 3, 4, 0, 5, 6, 7, 8])?;
/// assert_eq!(neighbors(&board, &state).len(), 4);
///
/// // Blank in a corner: only two.
/// assert_eq!(neighbors(&board, board.goal()).len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn neighbors(board: &Board, state: &State) -> ArrayVec<[State; 4]> {
    let size = board.size();
    let blank = state.blank_index();
    let (row, col) = board.coordinate(blank);

    let mut successors = ArrayVec::new();
    for (dr, dc) in DIRECTIONS {
        let (Some(new_row), Some(new_col)) =
            (row.checked_add_signed(dr), col.checked_add_signed(dc))
        else {
            continue;
        };
        if new_row >= size || new_col >= size {
            continue;
        }
        let mut tiles = state.tiles().to_vec();
        tiles.swap(blank, board.index(new_row, new_col));
        successors.push(State::from_tiles_unchecked(tiles));
    }
    successors
}
