//! Full-size board with `|` and `-+-+-` separators.

use super::Renderer;
use super::super::{Board, Cell};
use tracing::instrument;

const ROW_SEPARATOR: &str = "\n-+-+-\n";

/// Renders a 3x3 grid with the cell legend beside each row:
///
/// ```text
/// X| |  1 2 3
/// -+-+-
///  |O|  4 5 6
/// -+-+-
///  | |  7 8 9
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardRenderer;

impl Renderer for StandardRenderer {
    #[instrument(skip_all)]
    fn render(&self, board: &Board) -> String {
        Cell::rows()
            .iter()
            .map(|row| {
                let marks: Vec<_> = row.iter().map(|cell| board.get(*cell).symbol()).collect();
                let legend: Vec<_> = row.iter().map(|cell| cell.label()).collect();
                format!("{} {}", marks.join("|"), legend.join(" "))
            })
            .collect::<Vec<_>>()
            .join(ROW_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::super::Mark;

    #[test]
    fn test_blank_board() {
        let expected = " | |  1 2 3\n-+-+-\n | |  4 5 6\n-+-+-\n | |  7 8 9";
        assert_eq!(StandardRenderer.render(&Board::new_blank()), expected);
    }

    #[test]
    fn test_marks_in_place() {
        let mut board = Board::new_blank();
        board.apply_move(Cell::TopLeft, Mark::PlayerX).unwrap();
        board.apply_move(Cell::Center, Mark::PlayerO).unwrap();
        board.apply_move(Cell::BottomRight, Mark::PlayerX).unwrap();

        let expected = "X| |  1 2 3\n-+-+-\n |O|  4 5 6\n-+-+-\n | |X 7 8 9";
        assert_eq!(StandardRenderer.render(&board), expected);
    }
}
