//! Terminal UI: a board you can click on.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::{BoardGeometry, CELL_HEIGHT, CELL_WIDTH, move_cursor};
pub use ui::draw;

use crate::config::GomokuConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gomoku_core::Game;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Run the TUI until the player quits.
pub fn run_tui(config: &GomokuConfig) -> Result<()> {
    // Log to a file so output doesn't tear the screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting Gomoku TUI");

    let game = Game::new(*config.board_size())?;
    let mut app = App::new(game, *config.show_coordinates());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!(status = ?app.game().status(), "TUI closed");
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut geometry = None;
        terminal.draw(|f| geometry = Some(ui::draw(f, app)))?;
        if let Some(geometry) = geometry {
            app.set_geometry(geometry);
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                AppAction::Continue
            }
            _ => AppAction::Continue,
        };

        if action == AppAction::Quit {
            return Ok(());
        }
    }
}
