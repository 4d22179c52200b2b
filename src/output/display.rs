//! Display functions for games and command results

use super::formatters::{create_progress_bar, empty_row, guess_row};
use crate::commands::{ReplayResult, StepOutcome};
use crate::core::Guess;
use crate::game::{Game, GameStatus, WordSource};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: one row per guess slot, played or not
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn write_board<O, W>(output: &mut O, game: &Game<W>) -> io::Result<()>
where
    O: Write + ?Sized,
    W: WordSource,
{
    for slot in game.guesses() {
        match slot {
            Some(guess) => writeln!(output, "  {}", guess_row(guess))?,
            None => writeln!(output, "  {}", empty_row())?,
        }
    }

    writeln!(
        output,
        "\n  Guesses: [{}] {}/{}",
        create_progress_bar(game.current_guess_index(), game.max_guesses(), 12),
        game.current_guess_index(),
        game.max_guesses()
    )
}

/// Print the evaluation of a single guess
pub fn print_check_result(guess: &Guess) {
    println!("\n  {}", guess_row(guess));
    if guess.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of a replayed game
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying against: {}",
        result.secret.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut turn = 0;
    for step in &result.steps {
        match &step.outcome {
            StepOutcome::Accepted(guess) => {
                turn += 1;
                println!("\nTurn {turn}: {}", guess_row(guess));
            }
            StepOutcome::Rejected(err) => {
                println!(
                    "\n{} {}",
                    format!("Rejected {}:", step.input.to_uppercase()).bright_black(),
                    err.to_string().red()
                );
            }
        }
    }

    if result.unplayed > 0 {
        println!(
            "\n{}",
            format!("{} guess(es) ignored after the game ended", result.unplayed).bright_black()
        );
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!(
                "✅ Solved in {}/{} guesses!",
                result.guesses_used(),
                result.max_guesses
            )
            .green()
            .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.max_guesses)
                .red()
                .bold()
        ),
        GameStatus::InProgress => println!(
            "{}",
            format!(
                "⏸  Game still in progress: {} of {} guesses used",
                result.guesses_used(),
                result.max_guesses
            )
            .yellow()
        ),
    }
}
