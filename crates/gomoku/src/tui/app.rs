//! Application state and input handling.

use super::input::{BoardGeometry, move_cursor};
use crate::messages::status_text;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use gomoku_core::{Game, MoveError};
use tracing::{debug, info, instrument};

/// What the event loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: (usize, usize),
    status_message: String,
    geometry: Option<BoardGeometry>,
    show_coordinates: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: Game, show_coordinates: bool) -> Self {
        let center = game.board().size() / 2;
        let status_message = status_text(&game);
        Self {
            game,
            cursor: (center, center),
            status_message,
            geometry: None,
            show_coordinates,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Keyboard cursor as `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether row and column labels are drawn.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Records where the board was last drawn so clicks can be mapped.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = Some(geometry);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                self.place(row as isize, col as isize);
            }
            code => {
                let (row, col) = move_cursor(self.cursor, code, self.game.board().size());
                if self.geometry.is_none_or(|g| g.is_visible(row, col)) {
                    self.cursor = (row, col);
                }
            }
        }
        AppAction::Continue
    }

    /// Handles a mouse event; only left-button presses place stones.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return AppAction::Continue;
        }
        let Some(geometry) = self.geometry else {
            return AppAction::Continue;
        };
        match geometry.cell_at(mouse.column, mouse.row) {
            Some((row, col)) => {
                debug!(column = mouse.column, screen_row = mouse.row, row, col, "Click mapped to cell");
                self.place(row, col);
            }
            None => debug!(column = mouse.column, screen_row = mouse.row, "Click outside board"),
        }
        AppAction::Continue
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.status_message = format!("New game. {}", status_text(&self.game));
    }

    fn place(&mut self, row: isize, col: isize) {
        match self.game.play(row, col) {
            Ok(_) => {
                if let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) {
                    self.cursor = (r, c);
                }
                self.status_message = status_text(&self.game);
                if self.game.status().is_over() {
                    self.status_message.push_str(" Press 'r' to play again.");
                }
            }
            Err(MoveError::GameOver) => {
                self.status_message =
                    format!("{} Press 'r' to play again.", status_text(&self.game));
            }
            Err(e) => {
                self.status_message = format!("{}. {}", e, status_text(&self.game));
            }
        }
    }
}
