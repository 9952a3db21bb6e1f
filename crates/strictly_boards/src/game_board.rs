//! A board composed with its rendering and hint settings.
//!
//! The classic plain, mini, hint, and hybrid boards are all this one type.
//! Rendering draws the board with the configured style, then appends hint
//! lines when hints are enabled. Nothing else varies between them.

use super::config::{BoardConfig, HintMode, RenderStyle};
use super::hints::{HintAdvisor, Hints};
use super::phases::BoardStatus;
use super::render::{CompactRenderer, Renderer, StandardRenderer};
use super::{Board, Cell, Mark, MoveError};
use tracing::instrument;

/// Board plus the settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    board: Board,
    config: BoardConfig,
}

impl GameBoard {
    /// Creates a blank board with the given style and hint mode.
    #[instrument]
    pub fn new(render_style: RenderStyle, hint_mode: HintMode) -> Self {
        Self::from_config(BoardConfig::new(render_style, hint_mode))
    }

    /// Creates a blank board from a configuration.
    pub fn from_config(config: BoardConfig) -> Self {
        Self {
            board: Board::new_blank(),
            config,
        }
    }

    /// Returns the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the mark on a cell.
    pub fn get(&self, cell: Cell) -> Mark {
        self.board.get(cell)
    }

    /// See [`Board::is_valid_move`].
    pub fn is_valid_move(&self, cell: &str) -> bool {
        self.board.is_valid_move(cell)
    }

    /// See [`Board::apply_move`].
    pub fn apply_move(&mut self, cell: Cell, mark: Mark) -> Result<(), MoveError> {
        self.board.apply_move(cell, mark)
    }

    /// See [`Board::winner`].
    pub fn winner(&self, mark: Mark) -> bool {
        self.board.winner(mark)
    }

    /// See [`Board::is_full`].
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// See [`Board::status`].
    pub fn status(&self) -> BoardStatus {
        self.board.status()
    }

    /// Hints for the current position, whether or not they are rendered.
    pub fn hints(&self) -> Hints {
        HintAdvisor::compute_hints(&self.board)
    }

    /// Renders the board, followed by any hint lines when hints are enabled.
    #[instrument(skip(self), fields(render_style = ?self.config.render_style(), hint_mode = ?self.config.hint_mode()))]
    pub fn render(&self) -> String {
        let mut out = match self.config.render_style() {
            RenderStyle::Standard => StandardRenderer.render(&self.board),
            RenderStyle::Compact => CompactRenderer.render(&self.board),
        };
        if self.config.hint_mode().is_enabled() {
            for line in self.hints().messages() {
                out.push('\n');
                out.push_str(&line);
            }
        }
        out
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::from_config(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::BoardVariant;

    fn x_threat(variant: BoardVariant) -> GameBoard {
        let mut board = GameBoard::from_config(variant.config());
        board.apply_move(Cell::TopLeft, Mark::PlayerX).unwrap();
        board.apply_move(Cell::TopCenter, Mark::PlayerX).unwrap();
        board
    }

    #[test]
    fn test_plain_has_no_hints() {
        let board = x_threat(BoardVariant::Plain);
        assert_eq!(
            board.render(),
            "X|X|  1 2 3\n-+-+-\n | |  4 5 6\n-+-+-\n | |  7 8 9"
        );
    }

    #[test]
    fn test_mini_has_no_hints() {
        let board = x_threat(BoardVariant::Mini);
        assert_eq!(board.render(), "XX. 123\n... 456\n... 789");
    }

    #[test]
    fn test_hint_appends_to_standard() {
        let board = x_threat(BoardVariant::Hint);
        assert_eq!(
            board.render(),
            "X|X|  1 2 3\n-+-+-\n | |  4 5 6\n-+-+-\n | |  7 8 9\nX can win in one more move."
        );
    }

    #[test]
    fn test_hybrid_appends_to_compact() {
        let board = x_threat(BoardVariant::Hybrid);
        assert_eq!(
            board.render(),
            "XX. 123\n... 456\n... 789\nX can win in one more move."
        );
    }

    #[test]
    fn test_hint_mode_without_threats_adds_nothing() {
        let board = GameBoard::new(RenderStyle::Compact, HintMode::Enabled);
        assert_eq!(board.render(), "... 123\n... 456\n... 789");
    }

    #[test]
    fn test_default_is_plain() {
        assert_eq!(*GameBoard::default().config(), BoardVariant::Plain.config());
    }
}
