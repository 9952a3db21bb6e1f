//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The board methods
//! delegate here so the rules can be reused on snapshots.

pub mod full;
pub mod win;

pub use full::is_full;
pub use win::{LINES, check_winner, is_winner};
