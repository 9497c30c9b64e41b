//! The game session type and its error surface.

use derive_more::{Display, Error};
use slidelace_core::{Board, State};
use slidelace_generator::{PuzzleGenerator, PuzzleSeed};
use slidelace_solver::Solver;

/// A sliding-tile game session.
///
/// Holds exactly one current state. Shells never mutate displayed state
/// directly; they forward clicks through [`tap`](Game::tap) and replay
/// solver output through [`solution`](Game::solution), so UI state can
/// never leak back into the search tables.
///
/// # Examples
///
/// ```
/// use slidelace_core::Board;
/// use slidelace_game::{Game, TapOutcome};
///
/// let board = Board::new(3)?;
/// let mut game = Game::new(&board);
/// assert!(game.is_solved());
///
/// // Slide tile 8 into the blank corner, then back.
/// assert_eq!(game.tap(2, 1)?, TapOutcome::Moved);
/// assert_eq!(game.tap(2, 2)?, TapOutcome::Solved);
/// assert_eq!(game.moves(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game<'a> {
    board: &'a Board,
    state: State,
    moves: usize,
}

impl<'a> Game<'a> {
    /// Creates a session starting at the goal arrangement.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self::with_start(board, board.goal().clone())
    }

    /// Creates a session starting from a specific state.
    ///
    /// `start` must be a valid state for `board`; boundary layers validate
    /// with [`Board::state_from_tiles`] before calling this.
    #[must_use]
    pub fn with_start(board: &'a Board, start: State) -> Self {
        debug_assert_eq!(start.tiles().len(), board.cells());
        Self {
            board,
            state: start,
            moves: 0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the number of accepted moves since the last reset.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Returns `true` if the current state is the goal arrangement.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == *self.board.goal()
    }

    /// Handles a click on the cell at `(row, col)`.
    ///
    /// The tap is accepted only if the cell is orthogonally adjacent to
    /// the blank (Manhattan distance exactly 1); the tiles are then
    /// swapped and the move counter advances.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the
    /// board and [`GameError::NotAdjacent`] for any cell that cannot swap
    /// with the blank, including the blank itself.
    pub fn tap(&mut self, row: usize, col: usize) -> Result<TapOutcome, GameError> {
        let size = self.board.size();
        if row >= size || col >= size {
            return Err(GameError::OutOfBounds { row, col });
        }
        let blank = self.state.blank_index();
        let (blank_row, blank_col) = self.board.coordinate(blank);
        if blank_row.abs_diff(row) + blank_col.abs_diff(col) != 1 {
            return Err(GameError::NotAdjacent { row, col });
        }

        let mut tiles = self.state.tiles().to_vec();
        tiles.swap(blank, self.board.index(row, col));
        self.state = State::from_tiles_unchecked(tiles);
        self.moves += 1;

        if self.is_solved() {
            Ok(TapOutcome::Solved)
        } else {
            Ok(TapOutcome::Moved)
        }
    }

    /// Replaces the current state with a freshly generated solvable one
    /// and resets the move counter.
    ///
    /// Returns the seed reproducing the shuffle.
    pub fn shuffle(&mut self, generator: &PuzzleGenerator<'_>) -> PuzzleSeed {
        let puzzle = generator.generate();
        self.state = puzzle.start;
        self.moves = 0;
        puzzle.seed
    }

    /// Like [`shuffle`](Game::shuffle), but deterministic for `seed`.
    pub fn shuffle_with_seed(&mut self, generator: &PuzzleGenerator<'_>, seed: PuzzleSeed) {
        let puzzle = generator.generate_with_seed(seed);
        self.state = puzzle.start;
        self.moves = 0;
    }

    /// Computes the optimal solution from the current state.
    ///
    /// Returns `None` if the current state cannot reach the goal (only
    /// possible when the session was started from an unchecked state).
    /// The returned [`Replay`] starts at the current state and ends at
    /// the goal; shells step through it one state at a time with a fixed
    /// inter-step delay.
    #[must_use]
    pub fn solution(&self) -> Option<Replay> {
        let outcome = Solver::new(self.board).solve(&self.state);
        let path = outcome.path?;
        Some(Replay {
            steps: path.len() - 1,
            path: path.into_iter(),
        })
    }
}

/// Result of an accepted [`Game::tap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The swap was applied; the puzzle is not solved yet.
    Moved,
    /// The swap was applied and reached the goal arrangement.
    Solved,
}

/// Iterator over the states of an optimal solution, start and goal
/// inclusive.
#[derive(Debug, Clone)]
pub struct Replay {
    path: std::vec::IntoIter<State>,
    steps: usize,
}

impl Replay {
    /// Number of moves in the solution (path length minus one).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Iterator for Replay {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        self.path.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.path.size_hint()
    }
}

impl ExactSizeIterator for Replay {}

/// A tap request the session must reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The clicked coordinate is outside the board.
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Clicked row.
        row: usize,
        /// Clicked column.
        col: usize,
    },
    /// The clicked cell is not orthogonally adjacent to the blank.
    #[display("cell ({row}, {col}) is not adjacent to the blank")]
    NotAdjacent {
        /// Clicked row.
        row: usize,
        /// Clicked column.
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use slidelace_core::{Board, State};
    use slidelace_generator::{PuzzleGenerator, PuzzleSeed};
    use slidelace_solver::neighbors;

    use super::*;

    #[test]
    fn new_game_starts_solved_at_goal() {
        let board = Board::new(3).unwrap();
        let game = Game::new(&board);
        assert!(game.is_solved());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.state(), board.goal());
    }

    #[test]
    fn tap_swaps_adjacent_tile_with_blank() {
        let board = Board::new(3).unwrap();
        let mut game = Game::new(&board);
        // Blank is at (2, 2); tile 6 sits above it.
        assert_eq!(game.tap(1, 2), Ok(TapOutcome::Moved));
        assert_eq!(game.state().tiles(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn tap_rejects_non_adjacent_cells() {
        let board = Board::new(3).unwrap();
        let mut game = Game::new(&board);
        assert_eq!(
            game.tap(0, 0),
            Err(GameError::NotAdjacent { row: 0, col: 0 })
        );
        // Diagonal neighbor of the blank.
        assert_eq!(
            game.tap(1, 1),
            Err(GameError::NotAdjacent { row: 1, col: 1 })
        );
        // Tapping the blank itself is distance 0.
        assert_eq!(
            game.tap(2, 2),
            Err(GameError::NotAdjacent { row: 2, col: 2 })
        );
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn tap_rejects_out_of_bounds_cells() {
        let board = Board::new(3).unwrap();
        let mut game = Game::new(&board);
        assert_eq!(
            game.tap(3, 0),
            Err(GameError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            game.tap(0, 9),
            Err(GameError::OutOfBounds { row: 0, col: 9 })
        );
    }

    #[test]
    fn returning_to_goal_reports_solved() {
        let board = Board::new(3).unwrap();
        let start = State::new(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let mut game = Game::with_start(&board, start);
        assert!(!game.is_solved());
        assert_eq!(game.tap(2, 2), Ok(TapOutcome::Solved));
        assert!(game.is_solved());
    }

    #[test]
    fn shuffle_produces_solvable_state_and_resets_moves() {
        let board = Board::new(4).unwrap();
        let generator = PuzzleGenerator::new(&board);
        let mut game = Game::new(&board);
        game.tap(3, 2).unwrap();

        let seed = game.shuffle(&generator);
        assert_eq!(game.moves(), 0);
        assert!(board.is_solvable(game.state()));

        // The returned seed reproduces the shuffle.
        let mut replayed = Game::new(&board);
        replayed.shuffle_with_seed(&generator, seed);
        assert_eq!(replayed.state(), game.state());
    }

    #[test]
    fn solution_replays_to_the_goal_one_legal_move_at_a_time() {
        let board = Board::new(3).unwrap();
        let generator = PuzzleGenerator::new(&board);
        let mut game = Game::new(&board);
        game.shuffle_with_seed(&generator, PuzzleSeed::from_bytes([9; 32]));

        let replay = game.solution().expect("shuffled states are solvable");
        let steps = replay.steps();
        let path: Vec<State> = replay.collect();
        assert_eq!(path.len(), steps + 1);
        assert_eq!(path.first(), Some(game.state()));
        assert_eq!(path.last(), Some(board.goal()));
        for pair in path.windows(2) {
            assert!(neighbors(&board, &pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn solution_is_none_for_unreachable_starts() {
        let board = Board::new(2).unwrap();
        let start = State::new(2, vec![2, 1, 3, 0]).unwrap();
        let game = Game::with_start(&board, start);
        assert!(game.solution().is_none());
    }
}
