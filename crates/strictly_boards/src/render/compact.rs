//! Tight board with one character per cell.

use super::Renderer;
use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// Glyph drawn for an empty cell.
pub const EMPTY_GLYPH: char = '.';

/// Renders three rows of three characters, legend to the right:
///
/// ```text
/// X.. 123
/// .O. 456
/// ... 789
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactRenderer;

fn glyph(mark: Mark) -> char {
    match mark {
        Mark::PlayerX => 'X',
        Mark::PlayerO => 'O',
        Mark::Empty => EMPTY_GLYPH,
    }
}

impl Renderer for CompactRenderer {
    #[instrument(skip_all)]
    fn render(&self, board: &Board) -> String {
        Cell::rows()
            .iter()
            .map(|row| {
                let marks: String = row.iter().map(|cell| glyph(board.get(*cell))).collect();
                let legend: String = row.iter().map(|cell| cell.label()).collect();
                format!("{marks} {legend}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
