//! Player-facing status text shared by the front ends.

use gomoku_core::{Game, GameStatus};

/// One-line description of where the game stands.
pub fn status_text(game: &Game) -> String {
    match game.status() {
        GameStatus::AwaitingMove(player) => format!("{} to move", player),
        GameStatus::Won(player) => match game.winning_direction() {
            Some(direction) => format!("{} wins! ({} five)", player, direction),
            None => format!("{} wins!", player),
        },
        GameStatus::Drawn => "Draw! The board is full.".to_string(),
    }
}
