//! Game session: guess submission, history and termination

use super::error::GameError;
use super::source::WordSource;
use crate::core::{Guess, Word, WordError};
use std::fmt;
use tracing::{debug, info};

/// Number of guesses a session allows unless configured otherwise
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_guesses: usize) -> Self {
        Self { max_guesses }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES)
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// One game of Wordle against a fixed secret word
///
/// Guess slots are allocated up front and filled strictly in order; the
/// number of filled slots always equals [`Game::current_guess_index`].
#[derive(Debug)]
pub struct Game<W: WordSource> {
    source: W,
    secret_word: Word,
    max_guesses: usize,
    guesses: Vec<Option<Guess>>,
    current_guess_index: usize,
}

impl<W: WordSource> Game<W> {
    /// Start a session with the default 6 guesses
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the word source hands out a secret
    /// that is not 5 letters long.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::game::{Game, WordSource};
    ///
    /// struct Fixed;
    ///
    /// impl WordSource for Fixed {
    ///     fn secret_word(&self) -> String {
    ///         "APPLE".to_string()
    ///     }
    ///
    ///     fn is_valid_word(&self, _candidate: &str) -> bool {
    ///         true
    ///     }
    /// }
    ///
    /// let mut game = Game::new(Fixed).unwrap();
    /// game.submit_guess("apple").unwrap();
    /// assert!(game.is_solved());
    /// assert!(game.should_end_game());
    /// ```
    pub fn new(source: W) -> Result<Self, GameError> {
        Self::with_config(source, GameConfig::default())
    }

    /// Start a session allowing `max_guesses` guesses
    ///
    /// # Errors
    /// Returns `GameError::NoGuessesAllowed` for zero guesses, or
    /// `GameError::InvalidSecret` for a malformed secret.
    pub fn with_max_guesses(source: W, max_guesses: usize) -> Result<Self, GameError> {
        Self::with_config(source, GameConfig::new(max_guesses))
    }

    /// Start a session from a [`GameConfig`]
    ///
    /// # Errors
    /// See [`Game::with_max_guesses`].
    pub fn with_config(source: W, config: GameConfig) -> Result<Self, GameError> {
        if config.max_guesses == 0 {
            return Err(GameError::NoGuessesAllowed);
        }

        let secret_word = Word::new(source.secret_word()).map_err(GameError::InvalidSecret)?;
        info!(max_guesses = config.max_guesses, "new game started");

        Ok(Self {
            source,
            secret_word,
            max_guesses: config.max_guesses,
            guesses: vec![None; config.max_guesses],
            current_guess_index: 0,
        })
    }

    /// Evaluate a candidate against the secret without recording it
    #[must_use]
    pub fn evaluate(&self, candidate: &Word) -> Guess {
        Guess::evaluate(candidate, &self.secret_word)
    }

    /// Submit a guess
    ///
    /// The candidate is uppercased letter by letter, then checked in order:
    /// 1. a guess slot must remain and the game must not be won
    /// 2. it must be exactly 5 letters
    /// 3. the word source must accept it
    ///
    /// On success the evaluated guess is stored in the next slot and returned.
    ///
    /// # Errors
    /// `GameError::GuessLimitExceeded`, `GameError::InvalidLength` or
    /// `GameError::NotAWord`, matching the checks above. A rejected guess
    /// leaves the session untouched.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<&Guess, GameError> {
        if self.current_guess_index >= self.max_guesses || self.is_solved() {
            debug!(candidate, "guess rejected: no guesses remaining");
            return Err(GameError::GuessLimitExceeded);
        }

        let word = match Word::new(candidate) {
            Ok(word) => word,
            Err(WordError::InvalidLength(length)) => {
                debug!(candidate, length, "guess rejected: wrong length");
                return Err(GameError::InvalidLength(length));
            }
        };

        if !self.source.is_valid_word(word.text()) {
            debug!(candidate = word.text(), "guess rejected: not a word");
            return Err(GameError::NotAWord(word.text().to_string()));
        }

        let guess = self.evaluate(&word);
        let index = self.current_guess_index;
        self.current_guess_index += 1;

        debug!(
            guess = %guess,
            turn = self.current_guess_index,
            max_guesses = self.max_guesses,
            "guess accepted"
        );
        if guess.is_solved() {
            info!(turns = self.current_guess_index, "game won");
        } else if self.current_guess_index >= self.max_guesses {
            info!(secret = self.secret_word.text(), "game lost");
        }

        Ok(self.guesses[index].insert(guess))
    }

    /// True once the most recent guess matched the secret exactly
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_guess().is_some_and(Guess::is_solved)
    }

    /// True if the game is won or every guess has been used
    #[must_use]
    pub fn should_end_game(&self) -> bool {
        self.is_solved() || self.current_guess_index >= self.max_guesses
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Won
        } else if self.current_guess_index >= self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// All guess slots, `None` for the ones not yet played
    #[must_use]
    pub fn guesses(&self) -> &[Option<Guess>] {
        &self.guesses
    }

    /// The guesses submitted so far, in order
    pub fn submitted(&self) -> impl Iterator<Item = &Guess> {
        self.guesses[..self.current_guess_index].iter().flatten()
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.current_guess_index
            .checked_sub(1)
            .and_then(|index| self.guesses[index].as_ref())
    }

    #[inline]
    #[must_use]
    pub const fn current_guess_index(&self) -> usize {
        self.current_guess_index
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.current_guess_index
    }

    /// The secret word (hide it from players until the game ends)
    #[inline]
    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret_word
    }
}
