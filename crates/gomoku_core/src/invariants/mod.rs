//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are testable independently and checked by [`Game`](crate::Game)
//! after each successful move.

mod move_count;

pub use move_count::{MoveCountBounded, MoveCountMatchesStones};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MoveCountMatchesStones, MoveCountBounded);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::default()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_rejections() {
        let mut board = Board::default();
        board.place_stone(0, 0, Player::Black);
        board.place_stone(0, 0, Player::White);
        board.place_stone(-3, 2, Player::White);
        board.place_stone(14, 14, Player::White);
        assert!(BoardInvariants::check_all(&board).is_ok());
        board.reset();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }
}
