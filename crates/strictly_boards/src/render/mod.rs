//! Text rendering strategies for a board.
//!
//! Renderers only read cell marks. Display glyphs are chosen while
//! formatting and are never written back into the board.

mod compact;
mod standard;

pub use compact::{CompactRenderer, EMPTY_GLYPH};
pub use standard::StandardRenderer;

use super::Board;

/// Converts a board into displayable text.
pub trait Renderer {
    /// Renders the board. Must not depend on anything but the board's marks.
    fn render(&self, board: &Board) -> String;
}
