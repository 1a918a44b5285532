//! Turn outcomes reported by [`BoardState::apply_turn`](crate::BoardState::apply_turn).
//!
//! A rejected turn leaves the board untouched. The frame loop treats a
//! rejection as a no-op and only logs it.

use serde::{Deserialize, Serialize};

use crate::{GameStatus, Player, Position};

/// An accepted turn: `player` marked `position`, leaving the board in `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// The player who moved.
    pub player: Player,
    /// The cell that was marked.
    pub position: Position,
    /// Board status after the end-of-turn evaluation.
    pub status: GameStatus,
}

/// Why a turn was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TurnRejected {
    /// The game on this board is already over.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell {_0} is out of range (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {position} is already occupied by player {by}")]
    Occupied {
        /// The requested cell.
        position: Position,
        /// The player already holding it.
        by: Player,
    },
}
