//! Pointer-to-cell mapping and cursor movement.

use crossterm::event::KeyCode;
use derive_new::new;

/// Terminal columns per board column.
pub const CELL_WIDTH: u16 = 2;

/// Terminal rows per board row.
pub const CELL_HEIGHT: u16 = 1;

/// Where the board's intersections were drawn on screen.
///
/// Intersection `(row, col)` sits at terminal cell
/// `(origin_x + col * CELL_WIDTH, origin_y + row * CELL_HEIGHT)`. A small
/// terminal may clip the board; only the first `visible_rows` rows and
/// `visible_cols` columns are then on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct BoardGeometry {
    origin_x: u16,
    origin_y: u16,
    size: usize,
    #[new(value = "usize::MAX")]
    visible_rows: usize,
    #[new(value = "usize::MAX")]
    visible_cols: usize,
}

impl BoardGeometry {
    /// Terminal position of intersection `(row, col)`.
    pub fn screen_position(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.origin_x + col as u16 * CELL_WIDTH,
            self.origin_y + row as u16 * CELL_HEIGHT,
        )
    }

    /// Limits the geometry to the rows and columns that fit on screen.
    pub fn clipped(self, visible_rows: usize, visible_cols: usize) -> Self {
        Self {
            visible_rows,
            visible_cols,
            ..self
        }
    }

    /// Returns true if intersection `(row, col)` was drawn.
    pub fn is_visible(&self, row: usize, col: usize) -> bool {
        row < self.size.min(self.visible_rows) && col < self.size.min(self.visible_cols)
    }

    /// Board coordinate nearest to the terminal cell `(column, row)`.
    ///
    /// Points more than half a cell outside the board are ignored. Points
    /// within that margin are rounded to the nearest line, which may still be
    /// one step past the edge; the board refuses those on placement. When the
    /// board is clipped, lines that were not drawn are ignored too.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(isize, isize)> {
        let col = nearest_line(column, self.origin_x, CELL_WIDTH, self.size)?;
        let row = nearest_line(row, self.origin_y, CELL_HEIGHT, self.size)?;
        if hidden(row, self.visible_rows, self.size) || hidden(col, self.visible_cols, self.size) {
            return None;
        }
        Some((row, col))
    }
}

/// Index of the grid line closest to `point`, rounding half-way points up.
fn nearest_line(point: u16, origin: u16, cell: u16, size: usize) -> Option<isize> {
    let rel = 2 * (i32::from(point) - i32::from(origin));
    let cell = i32::from(cell);
    let span = 2 * (i32::try_from(size).ok()? - 1) * cell;
    if rel < -cell || rel > span + cell {
        return None;
    }
    isize::try_from((rel + cell).div_euclid(2 * cell)).ok()
}

/// True when `index` lands on a line cut off by the screen edge.
fn hidden(index: isize, visible: usize, size: usize) -> bool {
    visible < size && usize::try_from(index).is_ok_and(|i| i >= visible)
}

/// Moves the keyboard cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode, size: usize) -> (usize, usize) {
    let (row, col) = cursor;
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(last), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(last)),
        _ => cursor,
    }
}
