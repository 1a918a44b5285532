//! The per-board game engine.
//!
//! [`BoardState`] owns nine cells, the player to move and the game status.
//! It never logs; callers observe the [`Placement`] or [`TurnRejected`]
//! returned by [`BoardState::apply_turn`].

use serde::{Deserialize, Serialize};

use crate::action::{Placement, TurnRejected};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::phases::{GameStatus, Outcome};
use crate::rules;
use crate::{Board, Cell, Player, Position};

/// State of one tic-tac-toe board.
///
/// Invariants:
/// - the player to move flips after every accepted turn
/// - a marked cell stays marked until [`reset`](Self::reset)
/// - once finished, no turn is accepted until [`reset`](Self::reset)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl BoardState {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Marks the cell at `index` for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`TurnRejected`] and leaves the board unchanged if the game is
    /// over, `index` is not in 0-8, or the cell is occupied.
    pub fn apply_turn(&mut self, index: usize) -> Result<Placement, TurnRejected> {
        if self.status.is_over() {
            return Err(TurnRejected::GameOver);
        }

        let position = Position::from_index(index).ok_or(TurnRejected::OutOfRange(index))?;

        if let Some(by) = self.board.get(position).player() {
            return Err(TurnRejected::Occupied { position, by });
        }

        let player = self.current_player;
        self.board.set(position, player.mark());
        self.current_player = player.opponent();
        self.status = self.evaluate();

        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "board invariants violated after turn at {position}"
        );

        Ok(Placement::new(player, position, self.status))
    }

    /// End-of-turn evaluation. A winning line beats a full board.
    fn evaluate(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.board) {
            GameStatus::Finished(Outcome::Winner(winner))
        } else if rules::is_draw(&self.board) {
            GameStatus::Finished(Outcome::Draw)
        } else {
            GameStatus::InProgress
        }
    }

    /// Clears the board and gives the first move back to X. Valid in any state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        self.board.cells()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has finished.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// The winner as a cell value; `Cell::Empty` for no winner.
    pub fn winner_cell(&self) -> Cell {
        self.status.winner_cell()
    }
}
