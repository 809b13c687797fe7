//! Board storage, stone placement and win checks.

use crate::error::BoardError;
use crate::rules;
use crate::types::{Cell, DEFAULT_BOARD_SIZE, Player, WIN_LENGTH};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument, trace};

/// Square five-in-a-row board.
///
/// Cells are stored row-major in a flat vector. Coordinates are signed so
/// that callers can pass raw pointer-derived values; anything outside
/// `[0, size)` is simply rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) move_count: usize,
}

impl Board {
    /// Creates an empty board with the given edge length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if `size` is smaller than [`WIN_LENGTH`], since no
    /// line could ever be completed on such a board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < WIN_LENGTH {
            return Err(BoardError::new(format!(
                "Board size {} is below the winning run length {}",
                size, WIN_LENGTH
            )));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            move_count: 0,
        }
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stones on the board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Returns true once every cell holds a stone.
    pub fn is_full(&self) -> bool {
        self.move_count == self.size * self.size
    }

    /// Places `player`'s stone at `(row, col)`.
    ///
    /// Returns `false` without touching the board when the coordinate is out
    /// of bounds or the cell is already occupied.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn place_stone(&mut self, row: isize, col: isize, player: Player) -> bool {
        let Some(idx) = self.index(row, col) else {
            trace!("Placement out of bounds");
            return false;
        };
        if self.cells[idx] != Cell::Empty {
            trace!(cell = ?self.cells[idx], "Placement on occupied cell");
            return false;
        }
        self.cells[idx] = Cell::Occupied(player);
        self.move_count += 1;
        true
    }

    /// Checks whether the stone at `(row, col)` completes a run of
    /// [`WIN_LENGTH`] for `player`.
    ///
    /// The anchor is expected to hold `player`'s stone, i.e. this is called
    /// right after a successful [`Board::place_stone`]. The anchor itself is
    /// counted unconditionally; it is not re-read from the board.
    #[instrument(skip(self))]
    pub fn check_win(&self, row: isize, col: isize, player: Player) -> bool {
        let won = rules::check_win(self, row, col, player);
        if won {
            debug!("Winning run found");
        }
        won
    }

    /// Clears every cell and the move counter.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.move_count = 0;
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(15).unwrap();
        assert_eq!(board.size(), 15);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.cells().len(), 225);
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_default_is_standard_size() {
        assert_eq!(Board::default(), Board::new(DEFAULT_BOARD_SIZE).unwrap());
    }

    #[test]
    fn test_too_small_board_rejected() {
        let err = Board::new(4).unwrap_err();
        assert!(err.message.contains("below the winning run length"));
        assert!(Board::new(0).is_err());
        assert!(Board::new(5).is_ok());
    }

    #[test]
    fn test_place_stone_sets_only_target() {
        let mut board = Board::default();
        assert!(board.place_stone(3, 4, Player::Black));
        assert_eq!(board.cell(3, 4), Some(Cell::Occupied(Player::Black)));
        assert_eq!(board.move_count(), 1);
        let occupied = board.cells().iter().filter(|c| **c != Cell::Empty).count();
        assert_eq!(occupied, 1);
        assert_eq!(board.cells()[3 * 15 + 4], Cell::Occupied(Player::Black));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::default();
        let before = board.clone();
        for (row, col) in [(-1, 0), (0, -1), (15, 0), (0, 15), (isize::MIN, isize::MAX)] {
            assert!(!board.place_stone(row, col, Player::White));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_occupied_rejected() {
        let mut board = Board::default();
        assert!(board.place_stone(7, 7, Player::Black));
        let before = board.clone();
        assert!(!board.place_stone(7, 7, Player::White));
        assert!(!board.place_stone(7, 7, Player::Black));
        assert_eq!(board, before);
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let board = Board::default();
        assert_eq!(board.cell(-1, 3), None);
        assert_eq!(board.cell(3, 15), None);
        assert_eq!(board.cell(14, 14), Some(Cell::Empty));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::default();
        board.place_stone(0, 0, Player::Black);
        board.place_stone(1, 1, Player::White);
        board.reset();
        assert_eq!(board, Board::default());
        assert!(board.place_stone(0, 0, Player::White));
    }

    #[test]
    fn test_display_rows() {
        let mut board = Board::new(5).unwrap();
        board.place_stone(0, 0, Player::Black);
        board.place_stone(0, 1, Player::White);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "● ○ · · ·");
        assert_eq!(lines[4], "· · · · ·");
    }
}
