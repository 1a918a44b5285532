//! Board invariants.
//!
//! Logical properties that hold for every [`BoardState`] reachable through
//! [`BoardState::apply_turn`] and [`BoardState::reset`]. They are asserted
//! in debug builds after each accepted turn.

use crate::phases::{GameStatus, Outcome};
use crate::rules;
use crate::{BoardState, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
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

/// A set of invariants checked together.
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

/// Invariant: players alternate, X first.
///
/// X holds as many cells as O or exactly one more, and the player to move
/// is X when the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardState> for AlternatingTurnInvariant {
    fn holds(state: &BoardState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);

        match x.checked_sub(o) {
            Some(0) => state.current_player() == Player::X,
            Some(1) => state.current_player() == Player::O,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: the recorded status agrees with the cells.
pub struct ConsistentStatusInvariant;

impl Invariant<BoardState> for ConsistentStatusInvariant {
    fn holds(state: &BoardState) -> bool {
        let board = state.board();
        let expected = match rules::check_winner(board) {
            Some(winner) => GameStatus::Finished(Outcome::Winner(winner)),
            None if rules::is_full(board) => GameStatus::Finished(Outcome::Draw),
            None => GameStatus::InProgress,
        };
        state.status() == expected
    }

    fn description() -> &'static str {
        "Status matches the winning lines and fullness of the board"
    }
}

/// Every invariant of a single board.
pub type BoardInvariants = (AlternatingTurnInvariant, ConsistentStatusInvariant);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_fresh_board() {
        assert!(BoardInvariants::check_all(&BoardState::new()).is_ok());
    }

    #[test]
    fn test_holds_through_a_full_game() {
        let mut state = BoardState::new();
        for idx in [0, 3, 1, 4, 2] {
            state.apply_turn(idx).unwrap();
            assert!(AlternatingTurnInvariant::holds(&state));
            assert!(ConsistentStatusInvariant::holds(&state));
        }
        assert!(state.is_over());
    }

    #[test]
    fn test_holds_after_rejected_turns() {
        let mut state = BoardState::new();
        state.apply_turn(4).unwrap();
        let _ = state.apply_turn(4);
        let _ = state.apply_turn(42);
        assert!(BoardInvariants::check_all(&state).is_ok());
    }
}
