//! Win detection anchored at the last placed stone.

use crate::board::Board;
use crate::types::{Direction, Player, WIN_LENGTH};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Length of the run through `(row, col)` along `direction`.
///
/// The anchor counts as one; stones are then counted outward in both senses
/// until the edge of the board or the first cell not holding `player`.
/// An anchor outside the board has no run.
pub fn run_length(board: &Board, row: isize, col: isize, player: Player, direction: Direction) -> usize {
    if board.cell(row, col).is_none() {
        return 0;
    }
    let (dr, dc) = direction.delta();
    1 + count_from(board, row, col, player, dr, dc) + count_from(board, row, col, player, -dr, -dc)
}

fn count_from(board: &Board, row: isize, col: isize, player: Player, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row + dr, col + dc);
    while board.cell(r, c).is_some_and(|cell| cell.is(player)) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// First direction, in [`Direction`] order, whose run reaches [`WIN_LENGTH`].
#[instrument(skip(board))]
pub fn winning_direction(board: &Board, row: isize, col: isize, player: Player) -> Option<Direction> {
    board.cell(row, col)?;
    Direction::iter().find(|&direction| run_length(board, row, col, player, direction) >= WIN_LENGTH)
}

/// Returns true if the stone at `(row, col)` is part of a winning run.
pub fn check_win(board: &Board, row: isize, col: isize, player: Player) -> bool {
    winning_direction(board, row, col, player).is_some()
}
