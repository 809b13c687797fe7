//! First-class move types for five-in-a-row.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A placement that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{player} -> ({row}, {col})")]
pub struct Move {
    /// The player who placed the stone.
    pub player: Player,
    /// Row of the stone.
    pub row: isize,
    /// Column of the stone.
    pub col: isize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, row: isize, col: isize) -> Self {
        Self { player, row, col }
    }
}

/// Reason a move was refused. The game state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
    },

    /// The cell already holds a stone.
    #[display("({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
    },

    /// The game has been won or drawn and awaits a reset.
    #[display("Game is already over")]
    GameOver,

    /// A board invariant failed after the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
