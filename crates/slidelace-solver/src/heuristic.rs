//! Admissible lower bound on remaining moves.

use slidelace_core::{Board, State};

/// Sums the Manhattan distance of every non-blank tile to its goal cell.
///
/// The estimate is **admissible** (it never exceeds the true remaining
/// distance, since every move relocates a single tile by one cell) and
/// **consistent** (one blank swap changes exactly one tile's distance by
/// exactly 1). Those two properties make A* return optimal paths without
/// re-expanding settled states.
///
/// `state` must satisfy the permutation invariant for `board`; callers
/// validate at the boundary.
///
/// # Examples
///
/// ```
/// use slidelace_core::{Board, State};
/// use slidelace_solver::manhattan;
///
/// let board = Board::new(3)?;
/// assert_eq!(manhattan(&board, board.goal()), 0);
///
/// let start = State::new(3, vec![1, 2, 3, 4, 5, 6, 0, 7, 8])?;
/// assert_eq!(manhattan(&board, &start), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn manhattan(board: &Board, state: &State) -> usize {
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(index, &tile)| {
            let (row, col) = board.coordinate(index);
            let (goal_row, goal_col) = board.goal_position(tile);
            row.abs_diff(goal_row) + col.abs_diff(goal_col)
        })
        .sum()
}
