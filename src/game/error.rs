//! Game session errors

use crate::core::WordError;

/// Errors raised by a game session
///
/// None of these leave the session modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// No guesses remain (or the game is already won)
    #[error("No guesses remaining")]
    GuessLimitExceeded,

    /// The candidate is not 5 letters long
    #[error("Guess must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    /// The word source rejected the candidate
    #[error("'{0}' is not in the word list")]
    NotAWord(String),

    /// A session was configured with zero guesses
    #[error("A game needs at least one guess")]
    NoGuessesAllowed,

    /// The word source produced a secret of the wrong length
    #[error("Word source produced an invalid secret: {0}")]
    InvalidSecret(#[source] WordError),
}
