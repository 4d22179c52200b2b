//! Interactive play mode
//!
//! Line-based game loop: read a guess, show the board, repeat until the game
//! ends or the player quits.

use crate::game::{Game, GameStatus, WordSource};
use crate::output::display::write_board;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Play one game, reading guesses from `input` and writing to `output`
///
/// Returns the status the game finished in; `GameStatus::InProgress` means the
/// player quit (or input ran out) before the game ended.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<W, R, O>(game: &mut Game<W>, mut input: R, output: &mut O) -> Result<GameStatus>
where
    W: WordSource,
    R: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(output, "║                 W O R D L E                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the 5-letter word in {} tries. Type 'quit' to give up.\n",
        game.max_guesses()
    )?;

    while !game.should_end_game() {
        let turn = game.current_guess_index() + 1;
        write!(output, "Guess {turn}/{}: ", game.max_guesses())?;
        output.flush().context("failed to flush output")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read guess")? == 0 {
            writeln!(output)?;
            break;
        }

        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            _ => {}
        }

        let submitted = game.submit_guess(line).map(|_| ());
        match submitted {
            Ok(()) => {
                writeln!(output)?;
                write_board(output, game)?;
                writeln!(output)?;
            }
            Err(err) => writeln!(output, "❌ {err}")?,
        }
    }

    let status = game.status();
    match status {
        GameStatus::Won => {
            let used = game.current_guess_index();
            writeln!(
                output,
                "{}",
                format!(
                    "🎉 Solved in {used} {}!",
                    if used == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
        }
        GameStatus::Lost => {
            writeln!(
                output,
                "{} The word was {}.",
                "Out of guesses.".red().bold(),
                game.secret_word().text().bright_yellow().bold()
            )?;
        }
        GameStatus::InProgress => {
            writeln!(
                output,
                "👋 Game abandoned. The word was {}.",
                game.secret_word().text().bright_yellow().bold()
            )?;
        }
    }

    Ok(status)
}
