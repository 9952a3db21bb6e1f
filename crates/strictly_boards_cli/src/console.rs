//! Console session: prompts, reads moves, and prints the board.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_boards::{GameController, Outcome, Turn};
use tracing::{info, instrument};

/// Plays one match, reading moves from `input` and writing to `output`.
///
/// Returns the outcome. Running out of input before the game ends is an
/// error.
#[instrument(skip_all)]
pub fn play<R, W>(mut game: GameController, mut input: R, mut output: W) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to tic-tac-toe!")?;

    let outcome = loop {
        writeln!(output, "\n{}", game.board().render())?;

        let turn = loop {
            writeln!(output, "{}", game.prompt())?;
            output.flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Reading move")?;
            if read == 0 {
                bail!("Input ended before the game finished");
            }

            match game.submit(line.trim())? {
                Turn::Retry => continue,
                turn => break turn,
            }
        };

        if let Turn::Finished(outcome) = turn {
            break outcome;
        }
    };

    writeln!(output, "\n{}", game.board().render())?;
    writeln!(output, "{}", outcome)?;
    writeln!(output, "Thanks for playing!")?;
    info!(%outcome, moves = game.history().len(), "Session complete");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_boards::{BoardVariant, GameBoard, Mark};

    fn run(variant: BoardVariant, moves: &str) -> (Result<Outcome>, String) {
        let game = GameController::new(GameBoard::from_config(variant.config()));
        let mut output = Vec::new();
        let result = play(game, Cursor::new(moves.to_string()), &mut output);
        (result, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn test_x_wins() {
        let (result, output) = run(BoardVariant::Plain, "1\n5\n2\n9\n3\n");
        assert_eq!(result.unwrap(), Outcome::Winner(Mark::PlayerX));
        assert!(output.starts_with("Welcome to tic-tac-toe!\n"));
        assert!(output.contains("What is O's move? (1-9)"));
        assert!(output.ends_with("X has won the game!\nThanks for playing!\n"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (result, output) = run(BoardVariant::Mini, "0\nabc\n1\n1\n5\n2\n9\n3\n");
        assert_eq!(result.unwrap(), Outcome::Winner(Mark::PlayerX));
        assert_eq!(output.matches("What is X's move? (1-9)").count(), 5);
    }

    #[test]
    fn test_tie() {
        let (result, output) = run(BoardVariant::Plain, "1\n5\n3\n2\n4\n6\n8\n7\n9\n");
        assert_eq!(result.unwrap(), Outcome::Tie);
        assert!(output.contains("The game is a tie!"));
    }

    #[test]
    fn test_hybrid_shows_hints() {
        let (result, output) = run(BoardVariant::Hybrid, "1\n5\n2\n9\n3\n");
        assert!(result.is_ok());
        assert!(output.contains("XX. 123\n.O. 456\n... 789\nX can win in one more move."));
    }

    #[test]
    fn test_input_runs_out() {
        let (result, _) = run(BoardVariant::Plain, "1\n5\n");
        assert!(result.is_err());
    }
}
