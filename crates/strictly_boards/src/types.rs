//! Core domain types: marks and the nine-cell board.

use super::action::MoveError;
use super::phases::{BoardStatus, Outcome};
use super::{Cell, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The occupant of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (moves first).
    PlayerX,
    /// Player O.
    PlayerO,
    /// No mark yet.
    #[default]
    Empty,
}

impl Mark {
    /// Both player marks, X first.
    pub const PLAYERS: [Mark; 2] = [Mark::PlayerX, Mark::PlayerO];

    /// Returns the opposing player. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerX => Mark::PlayerO,
            Mark::PlayerO => Mark::PlayerX,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Returns true for `PlayerX` and `PlayerO`.
    pub fn is_player(self) -> bool {
        !matches!(self, Mark::Empty)
    }

    /// Text shown for this mark on a standard board.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::PlayerX => "X",
            Mark::PlayerO => "O",
            Mark::Empty => " ",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 3x3 tic-tac-toe board.
///
/// Storage is a fixed array addressed through [`Cell`], so every cell always
/// has exactly one mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    marks: [Mark; 9],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn new_blank() -> Self {
        Self {
            marks: [Mark::Empty; 9],
        }
    }

    /// Returns the mark on a cell.
    pub fn get(&self, cell: Cell) -> Mark {
        self.marks[cell.slot()]
    }

    /// Returns true if the cell holds no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Mark::Empty
    }

    /// Returns true iff `cell` names one of the nine cells and that cell is empty.
    ///
    /// Unknown labels are not an error here, just an invalid move.
    #[instrument(skip(self))]
    pub fn is_valid_move(&self, cell: &str) -> bool {
        Cell::from_label(cell).is_some_and(|cell| self.is_empty(cell))
    }

    /// Places `mark` on `cell`.
    ///
    /// # Errors
    ///
    /// [`MoveError::CellOccupied`] if the cell already holds a mark, and
    /// [`MoveError::BlankMark`] if `mark` is [`Mark::Empty`]. The board is
    /// left unchanged on error.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: Cell, mark: Mark) -> Result<(), MoveError> {
        if !mark.is_player() {
            return Err(MoveError::BlankMark(cell));
        }
        if !self.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }
        self.marks[cell.slot()] = mark;
        debug!(%cell, %mark, "Move applied");
        Ok(())
    }

    /// Returns a copy of this board with `mark` on `cell`, or `None` if the
    /// move is not legal. The receiver is never modified.
    pub fn with_move(&self, cell: Cell, mark: Mark) -> Option<Board> {
        let mut snapshot = self.clone();
        snapshot.apply_move(cell, mark).ok()?;
        Some(snapshot)
    }

    /// Returns true if `mark` fills a complete line.
    pub fn winner(&self, mark: Mark) -> bool {
        rules::is_winner(self, mark)
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the empty cells in label order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|cell| self.is_empty(*cell))
    }

    /// Reports whether play can continue.
    ///
    /// A win is reported ahead of a full board, so a board that is both won
    /// and full is a win.
    pub fn status(&self) -> BoardStatus {
        if let Some(winner) = rules::check_winner(self) {
            BoardStatus::Terminal(Outcome::Winner(winner))
        } else if self.is_full() {
            BoardStatus::Terminal(Outcome::Tie)
        } else {
            BoardStatus::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_blank()
    }
}
