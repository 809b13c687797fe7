//! Line-oriented front end: one command per input line.

use crate::messages::status_text;
use anyhow::Result;
use gomoku_core::{Board, Game};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a stone at `(row, col)`.
    Place(isize, isize),
    /// Start a new game.
    Reset,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cannot parse {:?}: expected `<row> <col>`, `reset` or `quit`", input)]
pub struct ParseError {
    /// The offending line, trimmed.
    pub input: String,
}

impl ConsoleCommand {
    /// Parses a line such as `7 7`, `7,7`, `reset` or `q`.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let trimmed = line.trim();
        let err = || ParseError {
            input: trimmed.to_string(),
        };

        match trimmed.to_ascii_lowercase().as_str() {
            "r" | "reset" | "restart" => return Ok(Self::Reset),
            "q" | "quit" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        let parts: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(err());
        };
        let row = row.parse().map_err(|_| err())?;
        let col = col.parse().map_err(|_| err())?;
        Ok(Self::Place(row, col))
    }
}

/// Renders the board, optionally framed with row and column numbers.
pub fn render_board(board: &Board, show_coordinates: bool) -> String {
    if !show_coordinates {
        return board.to_string();
    }

    let size = board.size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');
    for (row, cells) in board.cells().chunks(size).enumerate() {
        out.push_str(&format!("{:>3}", row));
        for cell in cells {
            out.push_str(&format!("{:>3}", cell.symbol()));
        }
        out.push('\n');
    }
    out
}

/// Console session over arbitrary input and output streams.
pub struct Console<R, W> {
    game: Game,
    input: R,
    output: W,
    show_coordinates: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console session for `game`.
    pub fn new(game: Game, input: R, output: W, show_coordinates: bool) -> Self {
        Self {
            game,
            input,
            output,
            show_coordinates,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!(size = self.game.board().size(), "Starting console session");
        self.show()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match ConsoleCommand::parse(&line) {
                Ok(ConsoleCommand::Quit) => break,
                Ok(ConsoleCommand::Reset) => {
                    self.game.reset();
                    writeln!(self.output, "New game.")?;
                    self.show()?;
                }
                Ok(ConsoleCommand::Place(row, col)) => match self.game.play(row, col) {
                    Ok(_) => self.show()?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                },
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        info!(status = ?self.game.status(), "Console session finished");
        Ok(())
    }

    /// Writes a pretty JSON snapshot of the game.
    pub fn write_snapshot(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.game)?;
        writeln!(self.output, "{}", json)?;
        Ok(())
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self) -> Result<()> {
        write!(self.output, "{}", render_board(self.game.board(), self.show_coordinates))?;
        writeln!(self.output, "{}", status_text(&self.game))?;
        if self.game.status().is_over() {
            writeln!(self.output, "Type `reset` to play again or `quit` to leave.")?;
        }
        Ok(())
    }
}
