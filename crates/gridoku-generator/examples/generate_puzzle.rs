//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a target empty-cell count
//! - Generate a puzzle blindly or with a uniqueness guarantee
//! - Reproduce a puzzle from its seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Require a unique solution (slower, consults the solution counter on every
//! removal):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --unique
//! ```
//!
//! Control the number of empty cells (default: 45):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --empty-cells 55 --unique
//! ```
//!
//! Reproduce a previous run from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-char-hex>
//! ```

use std::process;

use clap::Parser;
use gridoku_core::rate_difficulty;
use gridoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells to clear (0-81).
    #[arg(long, value_name = "COUNT", default_value_t = 45)]
    empty_cells: u8,

    /// Only remove cells while the puzzle keeps a unique solution.
    #[arg(long)]
    unique: bool,

    /// Seed to reproduce a previous run (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.empty_cells > 81 {
        eprintln!("--empty-cells must be at most 81.");
        process::exit(2);
    }

    let generator = PuzzleGenerator::new(args.empty_cells);
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);

    let puzzle = if args.unique {
        match generator.generate_unique_with_seed(seed) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    } else {
        generator.generate_with_seed(seed)
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem ({}):", rate_difficulty(&puzzle.problem));
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
}
