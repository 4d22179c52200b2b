//! Formatting utilities for terminal output

use crate::core::{Guess, LetterResult, LetterStatus, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile
#[must_use]
pub fn letter_tile(result: LetterResult) -> ColoredString {
    let tile = format!(" {} ", result.letter());
    match result.status() {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Unevaluated => tile.normal(),
    }
}

/// Render a guess as a row of coloured tiles followed by its emoji pattern
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    let tiles: String = guess.iter().map(|r| letter_tile(*r).to_string()).collect();
    format!("{tiles}  {}", guess.to_emoji())
}

/// Placeholder row for an unplayed guess slot
#[must_use]
pub fn empty_row() -> String {
    " _ ".repeat(WORD_LENGTH).bright_black().to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = (value * width)
        .checked_div(max)
        .map_or(0, |filled| filled.min(width));

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn guess_row_ends_with_emoji() {
        let secret = Word::new("APPLE").unwrap();
        let guess = Guess::evaluate(&Word::new("PLANE").unwrap(), &secret);
        assert!(guess_row(&guess).ends_with("🟨🟨🟨⬜🟩"));
    }

    #[test]
    fn letter_tile_contains_letter() {
        let tile = letter_tile(LetterResult::new('Q', LetterStatus::Absent));
        assert!(tile.to_string().contains(" Q "));
    }

    #[test]
    fn empty_row_has_five_slots() {
        assert_eq!(empty_row().matches('_').count(), 5);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0, 6, 6);
        assert_eq!(bar, "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(6, 6, 6);
        assert_eq!(bar, "██████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(3, 6, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1, 0, 4), "░░░░");
    }
}
