//! Pure five-in-a-row game logic.
//!
//! # Architecture
//!
//! - **Board**: grid of cells, stone placement and the anchored win check
//! - **Rules**: run counting along the four line axes, the draw rule
//! - **Game**: turn and outcome state machine a front end drives
//! - **Invariants**: properties re-checked after every move
//!
//! # Example
//!
//! ```
//! use gomoku_core::{Board, Player};
//!
//! let mut board = Board::default();
//! for col in 3..8 {
//!     assert!(board.place_stone(7, col, Player::Black));
//! }
//! assert!(board.check_win(7, 7, Player::Black));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::Board;
pub use error::BoardError;
pub use game::{Game, GameStatus};
pub use types::{Cell, DEFAULT_BOARD_SIZE, Direction, Player, WIN_LENGTH};
