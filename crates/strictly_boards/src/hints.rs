//! One-move win threats.
//!
//! Every hypothetical move is played on a snapshot of the board, so asking
//! for hints never changes the board being asked about.

use super::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which players could complete a line with one more move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hints {
    /// X has a cell that would complete a line.
    pub x_can_win_next: bool,
    /// O has a cell that would complete a line.
    pub o_can_win_next: bool,
}

impl Hints {
    /// Returns whether `mark` can win next move. Always false for `Empty`.
    pub fn can_win_next(&self, mark: Mark) -> bool {
        match mark {
            Mark::PlayerX => self.x_can_win_next,
            Mark::PlayerO => self.o_can_win_next,
            Mark::Empty => false,
        }
    }

    /// Hint lines to show under the board, X before O.
    pub fn messages(&self) -> Vec<String> {
        Mark::PLAYERS
            .into_iter()
            .filter(|mark| self.can_win_next(*mark))
            .map(|mark| format!("{} can win in one more move.", mark))
            .collect()
    }
}

/// Computes win-threat hints for a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintAdvisor;

impl HintAdvisor {
    /// Returns the empty cells where `mark` would complete a line.
    #[instrument(skip(board))]
    pub fn winning_cells(board: &Board, mark: Mark) -> Vec<Cell> {
        if !mark.is_player() {
            return Vec::new();
        }
        board
            .empty_cells()
            .filter(|cell| {
                board
                    .with_move(*cell, mark)
                    .is_some_and(|snapshot| snapshot.winner(mark))
            })
            .collect()
    }

    /// Checks both players for a one-move win.
    #[instrument(skip(board))]
    pub fn compute_hints(board: &Board) -> Hints {
        let hints = Hints {
            x_can_win_next: !Self::winning_cells(board, Mark::PlayerX).is_empty(),
            o_can_win_next: !Self::winning_cells(board, Mark::PlayerO).is_empty(),
        };
        debug!(?hints, "Hints computed");
        hints
    }
}
