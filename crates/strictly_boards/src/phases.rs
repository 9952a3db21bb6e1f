//! Board status and game outcomes.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Winner(Mark),
    /// Every cell filled with no line completed.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} has won the game!", mark),
            Outcome::Tie => write!(f, "The game is a tie!"),
        }
    }
}

/// Whether a board still accepts play.
///
/// There is no transition out of `Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    /// No winner and at least one empty cell.
    InProgress,
    /// Won or full.
    Terminal(Outcome),
}

impl BoardStatus {
    /// Returns true once the board is won or full.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BoardStatus::Terminal(_))
    }

    /// Returns the outcome of a terminal board.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            BoardStatus::InProgress => None,
            BoardStatus::Terminal(outcome) => Some(*outcome),
        }
    }
}
