//! Strictly Boards - console tic-tac-toe.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use strictly_boards::{GameBoard, GameController};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.board_config()?;
    info!(?config, "Starting Strictly Boards");

    let game = GameController::new(GameBoard::from_config(config));
    let stdin = std::io::stdin();
    console::play(game, stdin.lock(), std::io::stdout().lock())?;

    Ok(())
}
