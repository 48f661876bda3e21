//! Puzzle generation for the Gridoku Sudoku toolkit.
//!
//! A [`PuzzleGenerator`] synthesizes a random complete solution (randomized
//! backtracking over an empty board) and carves cells out of it:
//!
//! - blind carving clears random cells with no uniqueness guarantee;
//! - uniqueness-preserving carving consults the solver's solution counter
//!   after every tentative removal and restarts, boundedly, when it gets
//!   stuck.
//!
//! All randomness derives from a [`PuzzleSeed`], so any generated puzzle can
//! be reproduced from its seed alone.
//!
//! # Examples
//!
//! ```
//! use gridoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(45);
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("docs"));
//!
//! assert_eq!(puzzle.problem.empty_count(), 45);
//! assert!(puzzle.solution.is_full());
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
