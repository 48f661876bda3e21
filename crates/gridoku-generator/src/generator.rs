//! Puzzle generation by carving cells out of a random complete solution.

use derive_more::{Display, Error};
use gridoku_core::{Board, Position};
use gridoku_solver::{count_solutions, solve_randomized};
use log::{debug, trace};
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// Error returned when uniqueness-preserving generation gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// Every restart exhausted its removal budget before reaching the
    /// requested number of empty cells.
    #[display(
        "no puzzle with {empty_cells} empty cells and a unique solution was found within {retries} restarts"
    )]
    RetriesExhausted {
        /// Requested number of empty cells.
        empty_cells: u8,
        /// Number of full restarts performed.
        retries: u32,
    },
}

/// A generated puzzle together with the solution it was carved from and the
/// seed that reproduces both.
///
/// The two boards are independently owned; the problem holds a subset of the
/// solution's cells and keeps no other link to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle to present, with `empty_cells` cells cleared.
    pub problem: Board,
    /// The complete solution the problem was carved from.
    pub solution: Board,
    /// The seed that derives this exact pair.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles by solving an empty board with shuffled
/// candidates and then clearing cells.
///
/// Two carving strategies are offered:
///
/// - [`generate`](Self::generate) clears uniformly random cells with no
///   uniqueness check; cheap, but the result may admit several solutions.
/// - [`generate_unique`](Self::generate_unique) only keeps a removal if the
///   puzzle still has exactly one solution, restarting from a fresh solution
///   when the removal budget runs out.
///
/// # Examples
///
/// ```
/// use gridoku_generator::PuzzleGenerator;
/// use gridoku_solver::has_unique_solution;
///
/// let generator = PuzzleGenerator::new(40);
/// let puzzle = generator.generate_unique()?;
///
/// assert_eq!(puzzle.problem.empty_count(), 40);
/// assert!(has_unique_solution(&puzzle.problem));
/// # Ok::<(), gridoku_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    empty_cells: u8,
    max_attempts: u32,
    max_retries: u32,
}

impl PuzzleGenerator {
    /// Default per-pass removal budget: one full walk over the board.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 81;
    /// Default cap on full generation restarts.
    pub const DEFAULT_MAX_RETRIES: u32 = 100;

    /// Creates a generator that carves until `empty_cells` cells are empty.
    ///
    /// # Panics
    ///
    /// Panics if `empty_cells` exceeds 81.
    #[must_use]
    pub fn new(empty_cells: u8) -> Self {
        Self::with_limits(
            empty_cells,
            Self::DEFAULT_MAX_ATTEMPTS,
            Self::DEFAULT_MAX_RETRIES,
        )
    }

    /// Creates a generator with explicit removal and restart budgets.
    ///
    /// `max_attempts` bounds the tentative removals of one
    /// [`generate_unique`](Self::generate_unique) pass; `max_retries` bounds
    /// how many times the whole generation restarts before giving up.
    ///
    /// # Panics
    ///
    /// Panics if `empty_cells` exceeds 81.
    #[must_use]
    pub fn with_limits(empty_cells: u8, max_attempts: u32, max_retries: u32) -> Self {
        assert!(
            empty_cells <= 81,
            "a 9x9 puzzle cannot have {empty_cells} empty cells"
        );
        Self {
            empty_cells,
            max_attempts,
            max_retries,
        }
    }

    /// Returns the configured number of empty cells.
    #[must_use]
    pub const fn empty_cells(&self) -> u8 {
        self.empty_cells
    }

    /// Generates a puzzle from a fresh random seed, without a uniqueness
    /// check.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates a puzzle from `seed`, without a uniqueness check.
    ///
    /// A random complete solution is synthesized, then uniformly random
    /// still-filled cells are cleared until exactly `empty_cells` cells are
    /// empty. The result is always solvable (the solution completes it) but
    /// may admit other completions as well.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = random_solution(&mut rng);

        let target = usize::from(self.empty_cells);
        let mut problem = solution.clone();
        while problem.empty_count() < target {
            let pos = Position::ALL[rng.random_range(0..Position::ALL.len())];
            if problem.get(pos).is_some() {
                problem.clear(pos);
            }
        }

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }

    /// Generates a puzzle with a unique solution from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RetriesExhausted`] if no pass reaches the
    /// target within the restart budget.
    pub fn generate_unique(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_unique_with_seed(PuzzleSeed::random())
    }

    /// Generates a puzzle with a unique solution from `seed`.
    ///
    /// Each pass walks the 81 positions in a freshly shuffled order and
    /// tentatively clears cells, keeping a removal only if the puzzle still
    /// has exactly one completion. A pass that exhausts its removal budget
    /// (or the position list) before reaching the target is abandoned, and
    /// generation restarts with a new solution and a new order drawn from
    /// the same seed stream.
    ///
    /// On success the problem has exactly `empty_cells` empty cells and a
    /// single completion, which is the returned solution.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RetriesExhausted`] if no pass reaches the
    /// target within the restart budget.
    pub fn generate_unique_with_seed(
        &self,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        for restart in 0..self.max_retries {
            let solution = random_solution(&mut rng);
            if let Some(problem) = self.carve_unique(&solution, &mut rng) {
                return Ok(GeneratedPuzzle {
                    problem,
                    solution,
                    seed,
                });
            }
            debug!(
                "removal budget spent before reaching {} empty cells, restarting (restart {})",
                self.empty_cells,
                restart + 1,
            );
        }
        Err(GenerateError::RetriesExhausted {
            empty_cells: self.empty_cells,
            retries: self.max_retries,
        })
    }

    /// One carving pass. Returns the carved problem, or `None` if the pass
    /// ran out of attempts or positions before `empty_cells` removals stuck.
    fn carve_unique(&self, solution: &Board, rng: &mut Pcg64) -> Option<Board> {
        let target = usize::from(self.empty_cells);
        let mut problem = solution.clone();

        let mut order = Position::ALL;
        order.shuffle(rng);

        let mut attempts = 0;
        for &pos in &order {
            if problem.empty_count() == target {
                break;
            }
            if attempts == self.max_attempts {
                return None;
            }
            attempts += 1;

            let Some(digit) = problem.get(pos) else {
                continue;
            };
            problem.clear(pos);
            if count_solutions(&problem, 2) != 1 {
                problem.set(pos, digit);
                trace!("kept {digit} at {pos}: clearing it breaks uniqueness");
            }
        }

        (problem.empty_count() == target).then_some(problem)
    }
}

/// Synthesizes a complete solution by randomized solving of an empty board.
fn random_solution(rng: &mut Pcg64) -> Board {
    let mut board = Board::new();
    let solved = solve_randomized(&mut board, rng);
    assert!(solved, "an empty board always has a completion");
    board
}
