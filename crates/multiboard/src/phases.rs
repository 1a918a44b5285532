//! Game status and outcome of a single board.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Cell, Player};

/// Outcome of a finished game. Displays as the end-of-game banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    #[display("Player {_0} Wins")]
    Winner(Player),
    /// Game ended in a draw.
    #[display("Game Over")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Turns are accepted.
    #[default]
    InProgress,
    /// No further turns until reset.
    Finished(Outcome),
}

impl GameStatus {
    /// True once the game has finished.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    /// The winner, if the game finished with one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Finished(outcome) => outcome.winner(),
        }
    }

    /// The winner as a cell value; `Cell::Empty` means no winner (yet).
    pub fn winner_cell(&self) -> Cell {
        self.winner().map_or(Cell::Empty, Cell::Occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_banner_text() {
        assert_eq!(Outcome::Winner(Player::X).to_string(), "Player X Wins");
        assert_eq!(Outcome::Winner(Player::O).to_string(), "Player O Wins");
        assert_eq!(Outcome::Draw.to_string(), "Game Over");
    }

    #[test]
    fn test_status_winner_cell() {
        assert_eq!(GameStatus::InProgress.winner_cell(), Cell::Empty);
        assert_eq!(
            GameStatus::Finished(Outcome::Draw).winner_cell(),
            Cell::Empty
        );
        assert_eq!(
            GameStatus::Finished(Outcome::Winner(Player::O)).winner_cell(),
            Cell::Occupied(Player::O)
        );
    }
}
