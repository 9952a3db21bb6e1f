//! Full-board detection for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// Checks if every cell holds a player mark.
///
/// Independent of whether anyone has won.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    Cell::ALL.iter().all(|cell| board.get(*cell) != Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new_blank()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new_blank();
        board.apply_move(Cell::Center, Mark::PlayerX).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_eight_of_nine_not_full() {
        let mut board = Board::new_blank();
        for cell in &Cell::ALL[..8] {
            board.apply_move(*cell, Mark::PlayerO).unwrap();
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new_blank();
        let marks = [
            Mark::PlayerX,
            Mark::PlayerO,
            Mark::PlayerX,
            Mark::PlayerO,
            Mark::PlayerX,
            Mark::PlayerX,
            Mark::PlayerO,
            Mark::PlayerX,
            Mark::PlayerO,
        ];
        for (cell, mark) in Cell::ALL.into_iter().zip(marks) {
            board.apply_move(cell, mark).unwrap();
        }
        assert!(is_tie(&board));
    }
}
