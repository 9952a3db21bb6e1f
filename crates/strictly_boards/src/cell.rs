//! Cell identifiers for the nine board positions.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Cells are labelled `"1"` through `"9"` in row-major order. The labels are
/// shown to players in prompts and legends, so they are part of the public
/// contract. Use the variants as opaque keys; [`Cell::label`] and
/// [`FromStr`] are the only conversions to and from text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Cell 1.
    TopLeft,
    /// Cell 2.
    TopCenter,
    /// Cell 3.
    TopRight,
    /// Cell 4.
    MiddleLeft,
    /// Cell 5.
    Center,
    /// Cell 6.
    MiddleRight,
    /// Cell 7.
    BottomLeft,
    /// Cell 8.
    BottomCenter,
    /// Cell 9.
    BottomRight,
}

impl Cell {
    /// All nine cells in label order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// The label players type to pick this cell.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "1",
            Cell::TopCenter => "2",
            Cell::TopRight => "3",
            Cell::MiddleLeft => "4",
            Cell::Center => "5",
            Cell::MiddleRight => "6",
            Cell::BottomLeft => "7",
            Cell::BottomCenter => "8",
            Cell::BottomRight => "9",
        }
    }

    /// Looks up a cell by its exact label. Padded input such as `" 5"` is
    /// not a label; hosts trim what they read before asking.
    #[instrument]
    pub fn from_label(label: &str) -> Option<Cell> {
        match label {
            "1" => Some(Cell::TopLeft),
            "2" => Some(Cell::TopCenter),
            "3" => Some(Cell::TopRight),
            "4" => Some(Cell::MiddleLeft),
            "5" => Some(Cell::Center),
            "6" => Some(Cell::MiddleRight),
            "7" => Some(Cell::BottomLeft),
            "8" => Some(Cell::BottomCenter),
            "9" => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// Storage slot for this cell. Only the board uses it.
    pub(crate) fn slot(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// The three rows of cells, top to bottom.
    pub(crate) fn rows() -> [[Cell; 3]; 3] {
        [
            [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
            [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
            [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
        ]
    }
}

impl FromStr for Cell {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cell::from_label(s).ok_or_else(|| MoveError::InvalidCell(s.to_string()))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
