//! Turn order for one match, without any I/O.
//!
//! The host reads a line, hands it to [`GameController::submit`], and
//! prints whatever it likes based on the returned [`Turn`].

use super::action::{Move, MoveError};
use super::phases::{BoardStatus, Outcome};
use super::{Board, Cell, GameBoard, Mark};
use tracing::{debug, info, instrument, warn};

/// What happened after a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The input was not an open cell. Ask the same player again.
    Retry,
    /// The move was played. It is now this player's turn.
    Next(Mark),
    /// The move ended the game.
    Finished(Outcome),
}

/// Drives a single match on a [`GameBoard`]. X moves first.
#[derive(Debug, Clone)]
pub struct GameController {
    board: GameBoard,
    current: Mark,
    history: Vec<Move>,
    outcome: Option<Outcome>,
}

impl GameController {
    /// Starts a match on `board`.
    ///
    /// X moves first, so on a board that already has marks the player to
    /// move is O when X holds more cells, and X otherwise. A board that is
    /// already won or full starts finished.
    #[instrument(skip(board))]
    pub fn new(board: GameBoard) -> Self {
        let outcome = board.status().outcome();
        let current = next_player(board.board());
        debug!(%current, "Controller ready");
        Self {
            board,
            current,
            history: Vec::new(),
            outcome,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true once the game is over.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Prompt asking the current player for a cell.
    pub fn prompt(&self) -> String {
        format!("What is {}'s move? (1-9)", self.current)
    }

    /// Plays the current player's move at the cell named by `input`.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has finished. Unknown or
    /// occupied cells are not errors; they return [`Turn::Retry`].
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn submit(&mut self, input: &str) -> Result<Turn, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_valid_move(input) {
            warn!(input, "Rejected move");
            return Ok(Turn::Retry);
        }
        let cell: Cell = input.parse()?;
        self.play(Move::new(self.current, cell))
    }

    /// Plays a move, checking that it belongs to the current player.
    #[instrument(skip(self))]
    pub fn play(&mut self, action: Move) -> Result<Turn, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if action.mark != self.current {
            return Err(MoveError::WrongPlayer(action.mark));
        }

        self.board.apply_move(action.cell, action.mark)?;
        self.history.push(action);
        debug!(move_count = self.history.len(), %action, "Move recorded");

        match self.board.status() {
            BoardStatus::Terminal(outcome) => {
                info!(%outcome, "Game finished");
                self.outcome = Some(outcome);
                Ok(Turn::Finished(outcome))
            }
            BoardStatus::InProgress => {
                self.current = self.current.opponent();
                Ok(Turn::Next(self.current))
            }
        }
    }

    /// Rebuilds a match by playing `moves` in order on `board`.
    #[instrument(skip(board))]
    pub fn replay(board: GameBoard, moves: &[Move]) -> Result<Self, MoveError> {
        let mut controller = Self::new(board);
        for action in moves {
            controller.play(*action)?;
        }
        Ok(controller)
    }
}

/// Player to move on `board`, counting marks already placed.
fn next_player(board: &Board) -> Mark {
    let count = |mark| Cell::ALL.iter().filter(|cell| board.get(**cell) == mark).count();
    if count(Mark::PlayerX) > count(Mark::PlayerO) {
        Mark::PlayerO
    } else {
        Mark::PlayerX
    }
}
