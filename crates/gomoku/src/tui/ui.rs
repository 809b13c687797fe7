//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use super::input::{BoardGeometry, CELL_WIDTH};
use gomoku_core::{Cell, Player};

/// Width of the row-number gutter when coordinates are shown.
const LABEL_WIDTH: u16 = 3;

/// Renders the whole screen and returns where the board ended up.
pub fn draw(frame: &mut Frame, app: &App) -> BoardGeometry {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(4), // Status
        ])
        .split(area);

    let title = Paragraph::new("Gomoku - Five in a Row")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let geometry = draw_board(frame, chunks[1], app);

    let status = Paragraph::new(vec![
        Line::from(app.status_message().to_string()),
        Line::from(Span::styled(
            "click or arrows+enter: place   r: restart   q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    geometry
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> BoardGeometry {
    let board = app.game().board();
    let size = board.size();
    let show = app.show_coordinates();
    let gutter = if show { LABEL_WIDTH } else { 0 };
    let header = header_lines(size, show);

    let width = gutter + size as u16 * CELL_WIDTH - 1;
    let height = header.len() as u16 + size as u16;
    let board_area = center_rect(area, width, height);

    let last = app
        .game()
        .last_move()
        .and_then(|m| Some((usize::try_from(m.row).ok()?, usize::try_from(m.col).ok()?)));

    let mut lines: Vec<Line> = header
        .iter()
        .map(|label| {
            Line::from(Span::styled(
                format!("{}{}", " ".repeat(gutter as usize), label),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();

    for (row, cells) in board.cells().chunks(size).enumerate() {
        let mut spans = Vec::with_capacity(size * 2 + 1);
        if show {
            spans.push(Span::styled(
                format!("{:>2} ", row),
                Style::default().fg(Color::DarkGray),
            ));
        }
        for (col, cell) in cells.iter().enumerate() {
            let mut style = cell_style(*cell);
            if last == Some((row, col)) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if app.cursor() == (row, col) {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(cell_symbol(*cell).to_string(), style));
            if col + 1 < size {
                spans.push(Span::styled("─", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), board_area);

    // The paragraph is cut at the bottom and right edges of a small area.
    let header_height = header.len() as u16;
    let visible_rows = usize::from(board_area.height.saturating_sub(header_height));
    let visible_cols = usize::from(board_area.width.saturating_sub(gutter).div_ceil(CELL_WIDTH));
    BoardGeometry::new(board_area.x + gutter, board_area.y + header_height, size)
        .clipped(visible_rows, visible_cols)
}

/// Column labels, one line per digit: tens above units once the board
/// passes ten columns.
fn header_lines(size: usize, show: bool) -> Vec<String> {
    if !show {
        return Vec::new();
    }
    let units: String = (0..size).map(|col| format!("{:<2}", col % 10)).collect();
    if size <= 10 {
        return vec![units];
    }
    let tens: String = (0..size)
        .map(|col| match col / 10 {
            0 => "  ".to_string(),
            t => format!("{:<2}", t),
        })
        .collect();
    vec![tens, units]
}

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '┼',
        Cell::Occupied(player) => player.symbol(),
    }
}

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Player::Black) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Player::White) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
