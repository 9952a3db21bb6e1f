//! Tic-tac-toe board engine.
//!
//! A [`Board`] holds nine [`Cell`]s, each with one [`Mark`]. A
//! [`GameBoard`] pairs a board with a [`RenderStyle`] and a [`HintMode`],
//! which together replace the classic plain, mini, hint, and hybrid board
//! classes. [`GameController`] adds turn order for a single match.
//!
//! The library performs no I/O. It emits `tracing` events; installing a
//! subscriber is up to the host.
//!
//! # Example
//!
//! ```
//! use strictly_boards::{Cell, GameBoard, HintMode, Mark, RenderStyle};
//!
//! let mut board = GameBoard::new(RenderStyle::Compact, HintMode::Enabled);
//! board.apply_move(Cell::TopLeft, Mark::PlayerX).unwrap();
//! board.apply_move(Cell::TopCenter, Mark::PlayerX).unwrap();
//!
//! assert!(board.is_valid_move("3"));
//! assert_eq!(
//!     board.render(),
//!     "XX. 123\n... 456\n... 789\nX can win in one more move."
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod config;
mod controller;
mod game_board;
mod hints;
mod phases;
pub mod render;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use cell::Cell;
pub use config::{BoardConfig, BoardVariant, ConfigError, HintMode, RenderStyle};
pub use controller::{GameController, Turn};
pub use game_board::GameBoard;
pub use hints::{HintAdvisor, Hints};
pub use phases::{BoardStatus, Outcome};
pub use types::{Board, Mark};
