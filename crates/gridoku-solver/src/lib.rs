//! Backtracking search for the Gridoku Sudoku toolkit.
//!
//! Two independent algorithms operate on [`gridoku_core::Board`]:
//!
//! - [`backtrack`]: depth-first backtracking that fills a board in place,
//!   deterministically or with shuffled candidate values.
//! - [`counter`]: bounded enumeration that counts completions up to a cap,
//!   used as a uniqueness oracle by the generator.
//!
//! Both visit cells in the board's row-major scan order and recurse at most
//! 81 levels deep. Neither performs constraint propagation beyond direct
//! legality checks; correctness is preferred over speed.
//!
//! # Examples
//!
//! ```
//! use gridoku_solver::{has_unique_solution, solve};
//!
//! let mut board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert!(has_unique_solution(&board));
//! assert!(solve(&mut board));
//! assert!(board.is_full());
//! # Ok::<(), gridoku_core::ParseBoardError>(())
//! ```

pub mod backtrack;
pub mod counter;

pub use self::{
    backtrack::{solve, solve_randomized},
    counter::{count_solutions, has_unique_solution},
};
