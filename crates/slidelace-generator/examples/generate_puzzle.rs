//! Example demonstrating puzzle generation.
//!
//! Generates one or more solvable puzzles and prints each start state
//! with the seed that reproduces it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the board size and how many puzzles to produce:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 4 --count 3
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::Parser;
use slidelace_core::Board;
use slidelace_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size n (the board has n*n cells).
    #[arg(long, value_name = "N", default_value_t = 3)]
    size: usize,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Seed reproducing one specific puzzle (64 hex characters).
    /// Overrides --count.
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

    let puzzles = match args.seed {
        Some(seed) => vec![generator.generate_with_seed(seed)],
        None => (0..args.count).map(|_| generator.generate()).collect(),
    };

    for puzzle in puzzles {
        println!("Seed:");
        println!("  {}", puzzle.seed);
        println!("Puzzle:");
        for line in board.display(&puzzle.start).to_string().lines() {
            println!("  {line}");
        }
        println!();
    }
}
