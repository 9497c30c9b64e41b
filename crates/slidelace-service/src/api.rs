//! Operation handlers and boundary validation.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use derive_more::{Display, Error, From};
use log::debug;
use slidelace_core::{Board, InvalidSizeError, ValidationError};
use slidelace_generator::PuzzleGenerator;
use slidelace_solver::{SearchStats, Solver};

use crate::dto::{
    CheckRequest, CheckResponse, GenerateRequest, GenerateResponse, SolveRequest, SolveResponse,
    SolveStats,
};

/// A request was rejected before the core was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum ServiceError {
    /// The requested board size is unsupported.
    #[display("{_0}")]
    InvalidSize(#[error(source)] InvalidSizeError),
    /// The supplied state is not a permutation of `0..n²-1`.
    #[display("{_0}")]
    Validation(#[error(source)] ValidationError),
}

/// Returns the shared board instance for `n`, building it on first use.
///
/// Boards are immutable and cheap, so the cache is an optimization only:
/// it is filled lazily, never invalidated, and shared process-wide.
fn board_for(n: usize) -> Result<Arc<Board>, InvalidSizeError> {
    static BOARDS: OnceLock<Mutex<HashMap<usize, Arc<Board>>>> = OnceLock::new();
    let mut boards = BOARDS
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(board) = boards.get(&n) {
        return Ok(Arc::clone(board));
    }
    let board = Arc::new(Board::new(n)?);
    boards.insert(n, Arc::clone(&board));
    Ok(board)
}

fn wire_stats(stats: &SearchStats) -> SolveStats {
    SolveStats {
        steps: stats.steps(),
        space_complexity: stats.peak_frontier(),
        time_complexity: stats.nodes_generated(),
        time_ms: stats.elapsed().as_secs_f64() * 1000.0,
    }
}

/// Solves a start arrangement optimally.
///
/// An unsolvable start yields `success = false` with statistics still
/// populated; that is a normal response, not an error.
///
/// # Errors
///
/// Returns [`ServiceError`] if the size is unsupported or the state is
/// not a permutation of `0..n²-1`.
pub fn solve(request: &SolveRequest) -> Result<SolveResponse, ServiceError> {
    let board = board_for(request.n)?;
    let start = board.state_from_tiles(request.state.clone())?;

    let outcome = Solver::new(&board).solve(&start);
    debug!(
        "solve n={} solved={} steps={} nodes={} peak={} elapsed={:?}",
        request.n,
        outcome.is_solved(),
        outcome.stats.steps(),
        outcome.stats.nodes_generated(),
        outcome.stats.peak_frontier(),
        outcome.stats.elapsed(),
    );

    Ok(SolveResponse {
        success: outcome.is_solved(),
        stats: wire_stats(&outcome.stats),
        solution: outcome.path.map(|path| {
            path.into_iter()
                .map(|state| state.into_tiles().into_vec())
                .collect()
        }),
    })
}

/// Generates a guaranteed-solvable puzzle.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidSize`] if the size is unsupported.
pub fn generate(request: &GenerateRequest) -> Result<GenerateResponse, ServiceError> {
    let board = board_for(request.n)?;
    let puzzle = PuzzleGenerator::new(&board).generate();
    debug!("generate n={} seed={}", request.n, puzzle.seed);

    Ok(GenerateResponse {
        success: true,
        puzzle: puzzle.start.into_tiles().into_vec(),
        seed: puzzle.seed.to_string(),
    })
}

/// Checks solvability without searching.
///
/// # Errors
///
/// Returns [`ServiceError`] if the size is unsupported or the state is
/// not a permutation of `0..n²-1`.
pub fn check(request: &CheckRequest) -> Result<CheckResponse, ServiceError> {
    let board = board_for(request.n)?;
    let state = board.state_from_tiles(request.state.clone())?;
    let is_solvable = board.is_solvable(&state);
    debug!("check n={} solvable={}", request.n, is_solvable);

    Ok(CheckResponse {
        success: true,
        is_solvable,
    })
}
