//! Turn and outcome state machine driving a [`Board`].
//!
//! The board only knows about stones. This module adds whose turn it is,
//! applies the draw rule, and refuses further play once a game has ended
//! until it is explicitly reset.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::error::BoardError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules;
use crate::types::{Direction, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Waiting for the given player to place a stone.
    AwaitingMove(Player),
    /// The given player completed a run.
    Won(Player),
    /// The board filled up without a winner.
    Drawn,
}

impl GameStatus {
    /// Returns true for the terminal states.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }

    /// Player to move, if the game is still running.
    pub fn to_move(self) -> Option<Player> {
        match self {
            GameStatus::AwaitingMove(player) => Some(player),
            GameStatus::Won(_) | GameStatus::Drawn => None,
        }
    }
}

/// Five-in-a-row game engine.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    last_move: Option<Move>,
    winning_direction: Option<Direction>,
}

impl Game {
    /// Creates a new game on a board of the given size. Black moves first.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(size)?))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            status: GameStatus::AwaitingMove(Player::Black),
            last_move: None,
            winning_direction: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Most recent successful placement since the last reset.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Axis of the winning run once the game has been won.
    pub fn winning_direction(&self) -> Option<Direction> {
        self.winning_direction
    }

    /// Places a stone for the player to move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] in a terminal state and
    /// [`MoveError::OutOfBounds`] or [`MoveError::Occupied`] when the board
    /// refuses the placement. Returns [`MoveError::InvariantViolation`] when
    /// the board would be left inconsistent; the move is then discarded.
    /// None of these change the game.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn play(&mut self, row: isize, col: isize) -> Result<GameStatus, MoveError> {
        let GameStatus::AwaitingMove(player) = self.status else {
            return Err(MoveError::GameOver);
        };

        let mut next = self.board.clone();
        if !next.place_stone(row, col, player) {
            let err = match next.cell(row, col) {
                None => MoveError::OutOfBounds { row, col },
                Some(_) => MoveError::Occupied { row, col },
            };
            debug!(%err, "Placement refused");
            return Err(err);
        }

        BoardInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Board invariant violated");
            MoveError::InvariantViolation(descriptions)
        })?;

        self.board = next;
        self.last_move = Some(Move::new(player, row, col));
        self.winning_direction = rules::winning_direction(&self.board, row, col, player);

        self.status = if self.winning_direction.is_some() {
            info!(%player, direction = ?self.winning_direction, "Game won");
            GameStatus::Won(player)
        } else if rules::is_draw_after(&self.board, false) {
            info!(moves = self.board.move_count(), "Game drawn");
            GameStatus::Drawn
        } else {
            GameStatus::AwaitingMove(player.opponent())
        };

        Ok(self.status)
    }

    /// Clears the board and hands the first move back to Black.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::AwaitingMove(Player::Black);
        self.last_move = None;
        self.winning_direction = None;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_new_game_awaits_black() {
        let game = Game::default();
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::Black));
        assert_eq!(game.status().to_move(), Some(Player::Black));
        assert!(!game.status().is_over());
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::default();
        assert_eq!(game.play(7, 7), Ok(GameStatus::AwaitingMove(Player::White)));
        assert_eq!(game.play(7, 8), Ok(GameStatus::AwaitingMove(Player::Black)));
        assert_eq!(game.board().cell(7, 8), Some(Cell::Occupied(Player::White)));
        assert_eq!(game.last_move(), Some(Move::new(Player::White, 7, 8)));
    }

    #[test]
    fn test_failed_placement_keeps_turn() {
        let mut game = Game::default();
        game.play(0, 0).unwrap();
        assert_eq!(game.play(0, 0), Err(MoveError::Occupied { row: 0, col: 0 }));
        assert_eq!(game.play(15, 0), Err(MoveError::OutOfBounds { row: 15, col: 0 }));
        assert_eq!(game.play(-1, 4), Err(MoveError::OutOfBounds { row: -1, col: 4 }));
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::White));
        assert_eq!(game.board().move_count(), 1);
        assert_eq!(game.last_move(), Some(Move::new(Player::Black, 0, 0)));
    }

    #[test]
    fn test_win_is_terminal_until_reset() {
        let mut game = Game::default();
        for col in 0..4 {
            game.play(0, col).unwrap();
            game.play(1, col).unwrap();
        }
        assert_eq!(game.play(0, 4), Ok(GameStatus::Won(Player::Black)));
        assert_eq!(game.winning_direction(), Some(Direction::Horizontal));
        assert!(game.status().is_over());
        assert_eq!(game.status().to_move(), None);

        assert_eq!(game.play(5, 5), Err(MoveError::GameOver));
        assert_eq!(game.board().move_count(), 9);

        game.reset();
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::Black));
        assert_eq!(game.winning_direction(), None);
        assert_eq!(game.board().move_count(), 0);
        assert_eq!(game.board().cell(0, 4), Some(Cell::Empty));
        assert_eq!(game.play(0, 4), Ok(GameStatus::AwaitingMove(Player::White)));
    }

    #[test]
    fn test_small_board_rejected() {
        assert!(Game::new(3).is_err());
        assert_eq!(Game::new(9).unwrap().board().size(), 9);
    }

    #[test]
    fn test_invariant_violation_discards_move() {
        let mut game = Game::default();
        game.play(7, 7).unwrap();
        game.board.move_count = 3;

        let err = game.play(0, 0).unwrap_err();
        assert!(matches!(err, MoveError::InvariantViolation(_)));
        assert_eq!(game.board().cell(0, 0), Some(Cell::Empty));
        assert_eq!(game.board().move_count(), 3);
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::White));
        assert_eq!(game.last_move(), Some(Move::new(Player::Black, 7, 7)));
    }
}
