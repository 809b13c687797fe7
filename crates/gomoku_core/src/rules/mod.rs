//! Game rules for five-in-a-row.
//!
//! Pure functions over [`Board`](crate::Board) state. The board delegates its
//! win check here; the draw rule belongs to the caller-level state machine.

pub mod draw;
pub mod win;

pub use draw::{is_draw_after, is_full};
pub use win::{check_win, run_length, winning_direction};
