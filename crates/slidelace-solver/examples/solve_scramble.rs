//! Example demonstrating end-to-end puzzle solving.
//!
//! Generates a solvable scramble, runs the A* solver, and prints the
//! optimal path together with the search statistics.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_scramble
//! ```
//!
//! Choose the board size (default: 3):
//!
//! ```sh
//! cargo run --example solve_scramble -- --size 4
//! ```
//!
//! Reproduce a run from a seed printed by a previous invocation:
//!
//! ```sh
//! cargo run --example solve_scramble -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::Parser;
use slidelace_core::Board;
use slidelace_generator::{PuzzleGenerator, PuzzleSeed};
use slidelace_solver::Solver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size n (the board has n*n cells).
    #[arg(long, value_name = "N", default_value_t = 3)]
    size: usize,

    /// Seed for a reproducible scramble (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    let args = Args::parse();
    let board = match Board::new(args.size) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let generator = PuzzleGenerator::new(&board);
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Scramble:");
    println!("{}", indent(&board.display(&puzzle.start).to_string()));
    println!();

    let outcome = Solver::new(&board).solve(&puzzle.start);
    let Some(path) = &outcome.path else {
        // Unreachable for generated puzzles; kept for hand-fed states.
        eprintln!("No solution found.");
        process::exit(1);
    };

    println!("Path ({} steps):", outcome.stats.steps());
    for state in path {
        println!("{}", indent(&board.display(state).to_string()));
        println!();
    }

    println!("Stats:");
    println!("  steps: {}", outcome.stats.steps());
    println!("  nodes generated: {}", outcome.stats.nodes_generated());
    println!("  peak frontier: {}", outcome.stats.peak_frontier());
    println!("  elapsed: {:?}", outcome.stats.elapsed());
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
