//! Core data model for the Gridoku Sudoku toolkit.
//!
//! This crate provides the board representation shared by the solver and
//! generator crates, along with the search-free helpers that surround it:
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`position`]: board coordinates with row-major iteration order
//! - [`board`]: the 9×9 cell grid with placement-legality checks
//! - [`validate`]: structural validation of untrusted grids
//! - [`difficulty`]: empty-cell-count difficulty rating
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.set(Position::new(0, 0), Digit::D5);
//!
//! // Placing a second 5 in the same row would break the row constraint.
//! assert!(!board.is_valid(Position::new(0, 8), Digit::D5));
//! assert!(board.is_valid(Position::new(1, 1), Digit::D3));
//! ```

pub mod board;
pub mod difficulty;
pub mod digit;
pub mod position;
pub mod validate;

pub use self::{
    board::{Board, ParseBoardError},
    difficulty::{Difficulty, rate_difficulty},
    digit::Digit,
    position::Position,
    validate::{ValidationIssue, validate_grid},
};
