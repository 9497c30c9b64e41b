//! Rejection-sampling puzzle generation.

use rand::seq::SliceRandom as _;
use slidelace_core::{Board, State};

use crate::PuzzleSeed;

/// A generated, guaranteed-solvable start state together with the seed
/// that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The start arrangement; always passes the solvability checker.
    pub start: State,
    /// Seed reproducing this puzzle via
    /// [`PuzzleGenerator::generate_with_seed`].
    pub seed: PuzzleSeed,
}

/// Generates random solvable start states for one board instance.
///
/// Draws uniformly random permutations and accepts the first solvable one.
/// Each draw succeeds with probability 1/2, so the loop needs no iteration
/// cap; each trial costs one shuffle plus an O(n⁴) parity check.
///
/// # Examples
///
/// ```
/// use slidelace_core::Board;
/// use slidelace_generator::PuzzleGenerator;
///
/// let board = Board::new(3)?;
/// let puzzle = PuzzleGenerator::new(&board).generate();
/// assert!(board.is_solvable(&puzzle.start));
/// # Ok::<(), slidelace_core::InvalidSizeError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    board: &'a Board,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator for the given board.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Generates a solvable puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed on the same board size always produces the same
    /// start state.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        #[expect(clippy::cast_possible_truncation)]
        let mut tiles = (0..self.board.cells())
            .map(|value| value as u16)
            .collect::<Vec<_>>();
        loop {
            tiles.shuffle(&mut rng);
            let state = State::from_tiles_unchecked(tiles.clone());
            if self.board.is_solvable(&state) {
                return GeneratedPuzzle { start: state, seed };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;
    use slidelace_core::Board;

    use super::*;

    #[test]
    fn same_seed_reproduces_the_puzzle() {
        let board = Board::new(4).unwrap();
        let generator = PuzzleGenerator::new(&board);
        let seed = PuzzleSeed::from_bytes([42; 32]);
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn different_seeds_produce_different_puzzles() {
        let board = Board::new(4).unwrap();
        let generator = PuzzleGenerator::new(&board);
        let a = generator.generate_with_seed(PuzzleSeed::from_bytes([1; 32]));
        let b = generator.generate_with_seed(PuzzleSeed::from_bytes([2; 32]));
        assert_ne!(a.start, b.start);
    }

    #[test]
    fn every_generated_3x3_puzzle_is_solvable() {
        let board = Board::new(3).unwrap();
        let generator = PuzzleGenerator::new(&board);
        let failures = (0..1000_u16)
            .into_par_iter()
            .filter(|&trial| {
                let seed = seed_for_trial(trial);
                !board.is_solvable(&generator.generate_with_seed(seed).start)
            })
            .count();
        assert_eq!(failures, 0);
    }

    #[test]
    fn every_generated_4x4_puzzle_is_solvable() {
        let board = Board::new(4).unwrap();
        let generator = PuzzleGenerator::new(&board);
        let failures = (0..1000_u16)
            .into_par_iter()
            .filter(|&trial| {
                let seed = seed_for_trial(trial);
                !board.is_solvable(&generator.generate_with_seed(seed).start)
            })
            .count();
        assert_eq!(failures, 0);
    }

    #[test]
    fn generated_state_is_a_permutation() {
        let board = Board::new(5).unwrap();
        let puzzle = PuzzleGenerator::new(&board).generate();
        board
            .state_from_tiles(puzzle.start.tiles().to_vec())
            .expect("generated state must satisfy the permutation invariant");
    }

    fn seed_for_trial(trial: u16) -> PuzzleSeed {
        let mut bytes = [0_u8; 32];
        bytes[..2].copy_from_slice(&trial.to_le_bytes());
        PuzzleSeed::from_bytes(bytes)
    }
}
