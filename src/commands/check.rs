//! Single-guess check command
//!
//! Evaluates one guess against a given secret without starting a game.

use crate::core::{Guess, Word, WordError};

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns `WordError::InvalidLength` if either word is not 5 letters long.
pub fn check_guess(secret: &str, guess: &str) -> Result<Guess, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(Guess::evaluate(&guess, &secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_matches_evaluation() {
        let guess = check_guess("apple", "eagle").unwrap();
        assert_eq!(guess.to_emoji(), "🟨🟨⬜🟩🟩");
    }

    #[test]
    fn check_rejects_bad_lengths() {
        assert_eq!(check_guess("apples", "eagle"), Err(WordError::InvalidLength(6)));
        assert_eq!(check_guess("apple", "egg"), Err(WordError::InvalidLength(3)));
    }
}
