//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns true if `mark` occupies every cell of some line.
///
/// `Mark::Empty` never wins.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    mark.is_player()
        && LINES
            .iter()
            .any(|line| line.iter().all(|cell| board.get(*cell) == mark))
}

/// Returns the mark that completed a line, if any.
///
/// X is checked first. On a legal board at most one player can hold a line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    Mark::PLAYERS
        .into_iter()
        .find(|mark| is_winner(board, *mark))
}
