//! Core domain types for five-in-a-row.

use serde::{Deserialize, Serialize};

/// Number of consecutive stones that wins the game.
pub const WIN_LENGTH: usize = 5;

/// Edge length of a standard board.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Black stones (moves first).
    Black,
    /// White stones (moves second).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Stone glyph used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => '●',
            Player::White => '○',
        }
    }
}

/// A single intersection on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// Stone owned by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if the cell holds a stone of `player`.
    pub fn is(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }

    /// Glyph used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '·',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// A line axis through the board, walked in both senses during win checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::EnumIter, derive_more::Display)]
pub enum Direction {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    #[display("Anti-diagonal")]
    AntiDiagonal,
}

impl Direction {
    /// Unit step `(row, col)` in the positive sense of this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_direction_order_is_fixed() {
        let deltas: Vec<_> = Direction::iter().map(Direction::delta).collect();
        assert_eq!(deltas, vec![(0, 1), (1, 0), (1, 1), (1, -1)]);
    }

    #[test]
    fn test_cell_is() {
        assert!(Cell::Occupied(Player::Black).is(Player::Black));
        assert!(!Cell::Occupied(Player::White).is(Player::Black));
        assert!(!Cell::Empty.is(Player::White));
    }
}
