//! Draw detection for five-in-a-row.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (every cell occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.move_count() == board.size() * board.size()
}

/// Draw rule applied after a successful placement.
///
/// The game is drawn when the placement filled the board and did not win.
pub fn is_draw_after(board: &Board, won: bool) -> bool {
    !won && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn fill(board: &mut Board) {
        let size = board.size() as isize;
        for row in 0..size {
            for col in 0..size {
                let player = if (row + col) % 2 == 0 { Player::Black } else { Player::White };
                assert!(board.place_stone(row, col, player));
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::default()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(5).unwrap();
        board.place_stone(2, 2, Player::Black);
        assert!(!is_full(&board));
        assert!(!is_draw_after(&board, false));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(5).unwrap();
        fill(&mut board);
        assert!(is_full(&board));
        assert!(board.is_full());
        assert!(is_draw_after(&board, false));
    }

    #[test]
    fn test_not_draw_if_last_move_won() {
        let mut board = Board::new(5).unwrap();
        fill(&mut board);
        assert!(!is_draw_after(&board, true));
    }
}
