//! Depth-first backtracking solver.

use gridoku_core::{Board, Digit};
use rand::{Rng, seq::SliceRandom};

/// Fills `board` in place with a complete valid assignment, trying candidate
/// digits in ascending order.
///
/// Returns `true` if a completion was found; the board then holds it. Returns
/// `false` if no completion exists; every trial placement is undone, so the
/// board is restored to its pre-call state.
///
/// The search is fully deterministic: cells are visited in row-major order
/// via [`Board::find_empty`] and candidates in [`Digit::ALL`] order, so
/// solving the same board always produces the same completion.
///
/// # Examples
///
/// ```
/// use gridoku_core::Board;
/// use gridoku_solver::solve;
///
/// let mut board = Board::new();
/// assert!(solve(&mut board));
/// assert!(board.is_full());
/// ```
pub fn solve(board: &mut Board) -> bool {
    solve_with(board, &mut |_| {})
}

/// Fills `board` in place like [`solve`], but shuffles the candidate list at
/// every cell.
///
/// Only the per-cell candidate value order is randomized; the cell visitation
/// order stays row-major. The generator uses this to synthesize complete
/// solutions from an empty board. The candidate shuffle biases which
/// completions are likelier, so the result is not a uniform sample over all
/// complete grids.
///
/// # Examples
///
/// ```
/// use gridoku_core::Board;
/// use gridoku_solver::solve_randomized;
///
/// let mut board = Board::new();
/// assert!(solve_randomized(&mut board, &mut rand::rng()));
/// assert!(board.is_full());
/// ```
pub fn solve_randomized<R>(board: &mut Board, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    solve_with(board, &mut |candidates: &mut [Digit; 9]| {
        candidates.shuffle(rng);
    })
}

/// The recursion shared by both entry points. `reorder` is applied to the
/// candidate list before each cell's attempt loop; it is the only place
/// randomness can enter the search.
fn solve_with<F>(board: &mut Board, reorder: &mut F) -> bool
where
    F: FnMut(&mut [Digit; 9]),
{
    let Some(pos) = board.find_empty() else {
        return true;
    };

    let mut candidates = Digit::ALL;
    reorder(&mut candidates);

    for digit in candidates {
        if board.is_valid(pos, digit) {
            board.set(pos, digit);
            if solve_with(board, reorder) {
                return true;
            }
            board.clear(pos);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use gridoku_core::{Position, validate_grid};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    const CLASSIC_PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const CLASSIC_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    // Cell (0, 0) is empty, its row blocks 1-8 and its column blocks 9.
    const NO_CANDIDATE: &str = "
        _12 345 678
        9__ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
    ";

    fn assert_consistent(board: &Board) {
        let rows = board.to_rows().map(Vec::from).to_vec();
        assert_eq!(validate_grid(&rows), Vec::new());
    }

    #[test]
    fn test_solves_classic_puzzle_to_known_solution() {
        let mut board: Board = CLASSIC_PUZZLE.parse().unwrap();
        let solution: Board = CLASSIC_SOLUTION.parse().unwrap();

        assert!(solve(&mut board));
        assert_eq!(board, solution);
    }

    #[test]
    fn test_solved_board_has_no_zeros_and_no_conflicts() {
        let mut board: Board = CLASSIC_PUZZLE.parse().unwrap();
        assert!(solve(&mut board));
        assert!(board.is_full());
        assert_consistent(&board);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let puzzle: Board = CLASSIC_PUZZLE.parse().unwrap();

        let mut first = puzzle.clone();
        let mut second = puzzle;
        assert!(solve(&mut first));
        assert!(solve(&mut second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_solves_empty_board() {
        let mut board = Board::new();
        assert!(solve(&mut board));
        assert!(board.is_full());
        assert_consistent(&board);

        // Deterministic search fills the first row with ascending digits.
        let first_row: Vec<u8> = (0..9)
            .map(|col| board.get(Position::new(0, col)).unwrap().value())
            .collect();
        assert_eq!(first_row, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_unsolvable_returns_false_and_restores_board() {
        let mut board: Board = NO_CANDIDATE.parse().unwrap();
        let before = board.clone();

        assert!(!solve(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_solving_a_solved_board_is_a_no_op() {
        let mut board: Board = CLASSIC_SOLUTION.parse().unwrap();
        let before = board.clone();
        assert!(solve(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_randomized_solve_fills_a_valid_board() {
        let mut rng = Pcg64::seed_from_u64(7);
        let mut board = Board::new();
        assert!(solve_randomized(&mut board, &mut rng));
        assert!(board.is_full());
        assert_consistent(&board);
    }

    #[test]
    fn test_randomized_solve_is_reproducible_per_seed() {
        let mut first = Board::new();
        let mut second = Board::new();
        assert!(solve_randomized(&mut first, &mut Pcg64::seed_from_u64(42)));
        assert!(solve_randomized(&mut second, &mut Pcg64::seed_from_u64(42)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_randomized_solve_varies_across_seeds() {
        let mut first = Board::new();
        let mut second = Board::new();
        assert!(solve_randomized(&mut first, &mut Pcg64::seed_from_u64(1)));
        assert!(solve_randomized(&mut second, &mut Pcg64::seed_from_u64(2)));
        assert_ne!(first, second);
    }

    #[test]
    fn test_randomized_solve_of_unique_puzzle_matches_deterministic() {
        // A uniquely solvable puzzle has one completion, so candidate order
        // cannot change the answer.
        let mut deterministic: Board = CLASSIC_PUZZLE.parse().unwrap();
        let mut randomized = deterministic.clone();

        assert!(solve(&mut deterministic));
        assert!(solve_randomized(
            &mut randomized,
            &mut Pcg64::seed_from_u64(99)
        ));
        assert_eq!(deterministic, randomized);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            // Any subset of a complete solution leaves a solvable puzzle.
            #[test]
            fn test_masked_solution_stays_solvable(mask in prop::collection::vec(any::<bool>(), 81)) {
                let solution: Board = CLASSIC_SOLUTION.parse().unwrap();
                let mut puzzle = solution.clone();
                for (pos, masked) in Position::ALL.into_iter().zip(mask) {
                    if masked {
                        puzzle.clear(pos);
                    }
                }

                prop_assert!(solve(&mut puzzle));
                prop_assert!(puzzle.is_full());
            }
        }
    }
}
