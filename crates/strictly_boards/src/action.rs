//! Moves and the errors they can raise.

use super::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a mark placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The cell it lands on.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, cell: Cell) -> Self {
        Self { mark, cell }
    }

    /// Returns the mark being placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the target cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The text does not name one of the nine cells.
    #[display("{:?} is not a cell (expected 1-9)", _0)]
    InvalidCell(String),

    /// The cell already holds a mark. Moves never overwrite.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// A blank mark cannot be played.
    #[display("Cannot place a blank mark on cell {}", _0)]
    BlankMark(Cell),

    /// The mark played is not the one whose turn it is.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
