//! Move counter invariants.

use super::Invariant;
use crate::board::Board;
use crate::types::Cell;

/// Invariant: the move counter equals the number of stones on the board.
pub struct MoveCountMatchesStones;

impl Invariant<Board> for MoveCountMatchesStones {
    fn holds(board: &Board) -> bool {
        let stones = board.cells().iter().filter(|c| **c != Cell::Empty).count();
        stones == board.move_count()
    }

    fn description() -> &'static str {
        "Move count equals the number of stones on the board"
    }
}

/// Invariant: the move counter never exceeds the number of cells.
pub struct MoveCountBounded;

impl Invariant<Board> for MoveCountBounded {
    fn holds(board: &Board) -> bool {
        board.move_count() <= board.size() * board.size()
    }

    fn description() -> &'static str {
        "Move count is bounded by the board area"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_counts_track_placements() {
        let mut board = Board::new(5).unwrap();
        for col in 0..5 {
            board.place_stone(2, col, Player::White);
            assert!(MoveCountMatchesStones::holds(&board));
            assert!(MoveCountBounded::holds(&board));
        }
        assert_eq!(board.move_count(), 5);
    }

    #[test]
    fn test_corrupted_counter_violates() {
        let mut board = Board::new(5).unwrap();
        board.place_stone(0, 0, Player::Black);
        board.move_count = 3;
        assert!(!MoveCountMatchesStones::holds(&board));
        assert!(MoveCountBounded::holds(&board));

        board.move_count = 26;
        assert!(!MoveCountBounded::holds(&board));
    }
}
