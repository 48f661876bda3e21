//! The 9×9 Sudoku board.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// Error returned when grid text or a value grid cannot be converted into a
/// [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The text contained a character that is not a digit, an empty-cell
    /// marker, or whitespace.
    #[display("unexpected character {character:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The text did not describe exactly 81 cells.
    #[display("grid text must describe 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
    /// A value grid contained a cell outside the range 0-9.
    #[display("cell ({row}, {col}) holds {value}, outside the valid range 0-9")]
    ValueOutOfRange {
        /// Row of the offending cell.
        row: u8,
        /// Column of the offending cell.
        col: u8,
        /// The offending value.
        value: u8,
    },
}

/// A 9×9 Sudoku board.
///
/// Each cell holds `Option<Digit>`, `None` meaning empty. The board owns its
/// cells exclusively; `Clone` produces an independent deep copy, which is what
/// the solver and generator rely on when they work on scratch boards.
///
/// # Examples
///
/// Boards parse from the grid text format used throughout the test suites
/// (digits for filled cells, `_`, `.` or `0` for empty, whitespace ignored):
///
/// ```
/// use gridoku_core::{Board, Digit, Position};
///
/// let board: Board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(board.empty_count(), 51);
/// # Ok::<(), gridoku_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// The side length of the board.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a board from a 9×9 grid of values, `0` meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError::ValueOutOfRange`] if any cell holds a value
    /// greater than 9.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, ParseBoardError> {
        let mut board = Self::new();
        for pos in Position::ALL {
            let value = rows[pos.row() as usize][pos.col() as usize];
            if value == 0 {
                continue;
            }
            let digit = Digit::try_new(value).ok_or(ParseBoardError::ValueOutOfRange {
                row: pos.row(),
                col: pos.col(),
                value,
            })?;
            board.cells[pos.index()] = Some(digit);
        }
        Ok(board)
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places `digit` at `pos`, overwriting any previous content.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Checks whether placing `digit` at `pos` would keep the row, column,
    /// and 3×3 box free of duplicates.
    ///
    /// The scan covers the current grid state including `pos` itself, so a
    /// cell that already holds `digit` reports the placement as invalid. The
    /// check has no side effects.
    #[must_use]
    pub fn is_valid(&self, pos: Position, digit: Digit) -> bool {
        for i in 0..9 {
            if self.get(Position::new(pos.row(), i)) == Some(digit) {
                return false;
            }
            if self.get(Position::new(i, pos.col())) == Some(digit) {
                return false;
            }
        }

        let origin = pos.box_origin();
        for row in origin.row()..origin.row() + 3 {
            for col in origin.col()..origin.col() + 3 {
                if self.get(Position::new(row, col)) == Some(digit) {
                    return false;
                }
            }
        }

        true
    }

    /// Returns the first empty cell in row-major scan order, or `None` if the
    /// board is full.
    ///
    /// The scan order follows [`Position::ALL`] and determines the solver's
    /// deterministic cell visitation order, so it must not change.
    #[must_use]
    pub fn find_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        Self::SIZE * Self::SIZE - self.empty_count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the board as a 9×9 grid of values, `0` meaning empty.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            rows[pos.row() as usize][pos.col() as usize] =
                self.get(pos).map_or(0, Digit::value);
        }
        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[[u8; 9]; 9]> for Board {
    type Error = ParseBoardError;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '1'..='9' => Digit::try_new(character as u8 - b'0'),
                '_' | '.' | '0' => None,
                _ => return Err(ParseBoardError::InvalidCharacter { character }),
            };
            if count < 81 {
                board.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::WrongCellCount { count });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}
