//! Best-first (A*) search over the puzzle state graph.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
    time::{Duration, Instant},
};

use slidelace_core::{Board, State};

use crate::{manhattan, neighbors};

/// Statistics collected during one [`Solver::solve`] call.
///
/// Populated on success and on exhaustion alike, so service boundaries can
/// always report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    steps: usize,
    nodes_generated: usize,
    peak_frontier: usize,
    elapsed: Duration,
}

impl SearchStats {
    /// Length of the returned path minus one, or 0 when no path was found.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of distinct states ever admitted to the frontier, the start
    /// state included. A re-push after a cost improvement does not count
    /// again.
    #[must_use]
    pub fn nodes_generated(&self) -> usize {
        self.nodes_generated
    }

    /// Maximum frontier length observed during the search.
    #[must_use]
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }

    /// Wall-clock time spent inside the call.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Result of one [`Solver::solve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// The optimal path from start to goal, both inclusive, or `None` if
    /// the frontier exhausted without reaching the goal (only possible for
    /// starts that bypassed the solvability checker).
    pub path: Option<Vec<State>>,
    /// Search statistics, populated in either case.
    pub stats: SearchStats,
}

impl SolveOutcome {
    /// Returns `true` if a path to the goal was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }
}

/// Frontier entry. Ordered by the strict total key `(f, g, seq)` only; the
/// carried state is payload and parents live exclusively in `came_from`,
/// so no comparison ever touches heterogeneous data.
#[derive(Debug, Clone)]
struct OpenEntry {
    f: usize,
    g: usize,
    seq: u64,
    state: State,
}

impl OpenEntry {
    fn key(&self) -> (usize, usize, u64) {
        (self.f, self.g, self.seq)
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the smallest (f, g, seq)
        // pops first. seq is unique, so the order is total and
        // collision-free.
        other.key().cmp(&self.key())
    }
}

/// A* search engine for one board instance.
///
/// The solver holds only a reference to the immutable [`Board`]; every
/// [`solve`](Solver::solve) call owns its frontier and cost tables and
/// discards them on return, so a single solver can serve concurrent
/// callers without locking.
///
/// # Examples
///
/// ```
/// use slidelace_core::{Board, State};
/// use slidelace_solver::Solver;
///
/// let board = Board::new(3)?;
/// let solver = Solver::new(&board);
///
/// let outcome = solver.solve(board.goal());
/// assert_eq!(outcome.stats.steps(), 0);
/// assert_eq!(outcome.path, Some(vec![board.goal().clone()]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    board: &'a Board,
}

impl<'a> Solver<'a> {
    /// Creates a solver for the given board.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Searches for a shortest path from `start` to the goal.
    ///
    /// Expands frontier entries in ascending `f = g + h` order, admitting a
    /// neighbor whenever it is unseen or reached with a strictly lower
    /// g-cost than previously recorded. With the admissible, consistent
    /// Manhattan heuristic this returns an optimal path whenever one
    /// exists; an unsolvable start exhausts the frontier and yields
    /// `path = None` with the statistics collected so far.
    ///
    /// There is no internal cutoff; callers needing bounded latency wrap
    /// this call with an external deadline. `start` must satisfy the
    /// permutation invariant for this board.
    #[must_use]
    pub fn solve(&self, start: &State) -> SolveOutcome {
        let started = Instant::now();
        let goal = self.board.goal();

        let mut frontier = BinaryHeap::new();
        let mut came_from: HashMap<State, Option<State>> = HashMap::new();
        let mut best_g: HashMap<State, usize> = HashMap::new();
        let mut seq = 0_u64;
        let mut nodes_generated = 1_usize;
        let mut peak_frontier = 1_usize;

        frontier.push(OpenEntry {
            f: manhattan(self.board, start),
            g: 0,
            seq,
            state: start.clone(),
        });
        came_from.insert(start.clone(), None);
        best_g.insert(start.clone(), 0);

        while let Some(OpenEntry {
            g, state: current, ..
        }) = frontier.pop()
        {
            // A cheaper re-push may have left this entry behind.
            if best_g.get(&current).is_some_and(|&best| g > best) {
                continue;
            }

            if current == *goal {
                let path = reconstruct(&came_from, current);
                return SolveOutcome {
                    stats: SearchStats {
                        steps: path.len() - 1,
                        nodes_generated,
                        peak_frontier,
                        elapsed: started.elapsed(),
                    },
                    path: Some(path),
                };
            }

            for next in neighbors(self.board, &current) {
                let new_g = g + 1;
                let known = best_g.get(&next).copied();
                if known.is_none_or(|best| new_g < best) {
                    if known.is_none() {
                        nodes_generated += 1;
                    }
                    best_g.insert(next.clone(), new_g);
                    came_from.insert(next.clone(), Some(current.clone()));
                    seq += 1;
                    frontier.push(OpenEntry {
                        f: new_g + manhattan(self.board, &next),
                        g: new_g,
                        seq,
                        state: next,
                    });
                    peak_frontier = peak_frontier.max(frontier.len());
                }
            }
        }

        SolveOutcome {
            path: None,
            stats: SearchStats {
                steps: 0,
                nodes_generated,
                peak_frontier,
                elapsed: started.elapsed(),
            },
        }
    }
}

/// Walks parent back-references from the goal to the start and reverses
/// the result.
fn reconstruct(came_from: &HashMap<State, Option<State>>, goal: State) -> Vec<State> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(state) = cursor {
        cursor = came_from.get(&state).cloned().flatten();
        path.push(state);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use slidelace_core::{Board, State};
    use slidelace_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn state(size: usize, tiles: &[u16]) -> State {
        State::new(size, tiles.to_vec()).unwrap()
    }

    /// True distance of every state reachable from the goal, by BFS.
    fn distances_from_goal(board: &Board) -> HashMap<State, usize> {
        let mut distances = HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(board.goal().clone(), 0);
        queue.push_back(board.goal().clone());
        while let Some(current) = queue.pop_front() {
            let depth = distances[&current];
            for next in neighbors(board, &current) {
                if !distances.contains_key(&next) {
                    distances.insert(next.clone(), depth + 1);
                    queue.push_back(next);
                }
            }
        }
        distances
    }

    fn assert_path_is_legal(board: &Board, start: &State, outcome: &SolveOutcome) {
        let path = outcome.path.as_ref().expect("expected a path");
        assert_eq!(path.first(), Some(start));
        assert_eq!(path.last(), Some(board.goal()));
        assert_eq!(path.len() - 1, outcome.stats.steps());
        for pair in path.windows(2) {
            assert!(
                neighbors(board, &pair[0]).contains(&pair[1]),
                "consecutive states must differ by one legal move"
            );
        }
    }

    #[test]
    fn already_goal_returns_trivial_path() {
        let board = Board::new(3).unwrap();
        let outcome = Solver::new(&board).solve(board.goal());
        assert_eq!(outcome.path, Some(vec![board.goal().clone()]));
        assert_eq!(outcome.stats.steps(), 0);
        assert_eq!(outcome.stats.nodes_generated(), 1);
        assert_eq!(outcome.stats.peak_frontier(), 1);
    }

    #[test]
    fn one_move_from_goal() {
        let board = Board::new(3).unwrap();
        let start = state(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let outcome = Solver::new(&board).solve(&start);
        assert_eq!(outcome.stats.steps(), 1);
        assert_eq!(
            outcome.path,
            Some(vec![start.clone(), board.goal().clone()])
        );
        assert_path_is_legal(&board, &start, &outcome);
    }

    #[test]
    fn unsolvable_2x2_exhausts_its_component() {
        let board = Board::new(2).unwrap();
        let start = state(2, &[2, 1, 3, 0]);
        assert!(!board.is_solvable(&start));
        let outcome = Solver::new(&board).solve(&start);
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.stats.steps(), 0);
        // The 2x2 reachability class holds exactly half of 4! states.
        assert_eq!(outcome.stats.nodes_generated(), 12);
        assert!(outcome.stats.peak_frontier() >= 1);
    }

    #[test]
    fn unsolvable_3x3_reports_statistics() {
        let board = Board::new(3).unwrap();
        let start = state(3, &[2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert!(!board.is_solvable(&start));
        let outcome = Solver::new(&board).solve(&start);
        assert!(!outcome.is_solved());
        assert_eq!(outcome.stats.steps(), 0);
        assert!(outcome.stats.nodes_generated() > 0);
        assert!(outcome.stats.peak_frontier() > 0);
    }

    #[test]
    fn matches_exhaustive_search_on_2x2() {
        let board = Board::new(2).unwrap();
        let distances = distances_from_goal(&board);
        let solver = Solver::new(&board);

        // All 24 arrangements: solve agrees with solvability and BFS depth.
        let mut tiles = [0, 1, 2, 3];
        permute(&mut tiles, 4, &mut |tiles: &[u16]| {
            let start = State::from_tiles_unchecked(tiles.to_vec());
            let outcome = solver.solve(&start);
            match distances.get(&start) {
                Some(&depth) => {
                    assert!(board.is_solvable(&start));
                    assert_eq!(outcome.stats.steps(), depth);
                    assert_path_is_legal(&board, &start, &outcome);
                }
                None => {
                    assert!(!board.is_solvable(&start));
                    assert_eq!(outcome.path, None);
                }
            }
        });
    }

    #[test]
    fn optimal_on_3x3_across_depths() {
        let board = Board::new(3).unwrap();
        let distances = distances_from_goal(&board);
        let solver = Solver::new(&board);

        // One witness per depth up to 20 keeps the test fast while still
        // exercising non-trivial searches.
        let mut witnesses: HashMap<usize, State> = HashMap::new();
        for (state, &depth) in &distances {
            if depth <= 20 {
                witnesses.entry(depth).or_insert_with(|| state.clone());
            }
        }
        assert_eq!(witnesses.len(), 21);

        for (depth, start) in witnesses {
            let outcome = solver.solve(&start);
            assert_eq!(outcome.stats.steps(), depth, "depth {depth}");
            assert_path_is_legal(&board, &start, &outcome);
        }
    }

    #[test]
    fn solves_generated_puzzles() {
        let board = Board::new(3).unwrap();
        let solver = Solver::new(&board);
        let generator = PuzzleGenerator::new(&board);
        for trial in 0_u8..5 {
            let seed = PuzzleSeed::from_bytes([trial; 32]);
            let puzzle = generator.generate_with_seed(seed);
            let outcome = solver.solve(&puzzle.start);
            assert_path_is_legal(&board, &puzzle.start, &outcome);
        }
    }

    fn permute(values: &mut [u16], k: usize, visit: &mut impl FnMut(&[u16])) {
        if k <= 1 {
            visit(values);
            return;
        }
        for i in 0..k {
            permute(values, k - 1, visit);
            if k % 2 == 0 {
                values.swap(i, k - 1);
            } else {
                values.swap(0, k - 1);
            }
        }
    }
}
