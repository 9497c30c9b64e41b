//! Example exercising the service contract end to end.
//!
//! Generates a puzzle, checks its solvability, solves it, and prints each
//! JSON response the way a transport shell would serialize it.
//!
//! # Usage
//!
//! ```sh
//! RUST_LOG=debug cargo run --example request_demo
//! ```

use slidelace_service::{
    api,
    dto::{CheckRequest, GenerateRequest, SolveRequest},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let n = 3;

    let generated = api::generate(&GenerateRequest { n })?;
    println!("generate:");
    println!("{}", serde_json::to_string_pretty(&generated)?);

    let checked = api::check(&CheckRequest {
        n,
        state: generated.puzzle.clone(),
    })?;
    println!("check:");
    println!("{}", serde_json::to_string_pretty(&checked)?);

    let solved = api::solve(&SolveRequest {
        n,
        state: generated.puzzle,
    })?;
    println!("solve:");
    println!("{}", serde_json::to_string_pretty(&solved)?);

    Ok(())
}
