//! Replay command
//!
//! Feeds a scripted list of guesses to a fresh game and records what happened.

use crate::core::Guess;
use crate::game::{Game, GameConfig, GameError, GameStatus, WordSource};

/// What became of one scripted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Accepted(Guess),
    Rejected(GameError),
}

/// A single scripted guess and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    pub input: String,
    pub outcome: StepOutcome,
}

/// Result of replaying a game
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub secret: String,
    pub status: GameStatus,
    pub max_guesses: usize,
    pub steps: Vec<ReplayStep>,
    /// Guesses never tried because the game had already ended
    pub unplayed: usize,
}

impl ReplayResult {
    /// Number of guesses the game accepted
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, StepOutcome::Accepted(_)))
            .count()
    }
}

/// Replay `guesses` against a new game drawn from `source`
///
/// Rejected guesses are recorded and skipped; replay stops as soon as the game
/// ends.
///
/// # Errors
///
/// Returns an error if the game cannot be started (zero guesses configured or
/// a malformed secret from the word source).
pub fn replay_game<W, S>(
    source: W,
    config: GameConfig,
    guesses: &[S],
) -> Result<ReplayResult, GameError>
where
    W: WordSource,
    S: AsRef<str>,
{
    let mut game = Game::with_config(source, config)?;
    let mut steps = Vec::with_capacity(guesses.len());
    let mut played = 0;

    for input in guesses {
        if game.should_end_game() {
            break;
        }
        played += 1;

        let input = input.as_ref();
        let outcome = match game.submit_guess(input) {
            Ok(guess) => StepOutcome::Accepted(*guess),
            Err(err) => StepOutcome::Rejected(err),
        };
        steps.push(ReplayStep {
            input: input.to_string(),
            outcome,
        });
    }

    Ok(ReplayResult {
        secret: game.secret_word().text().to_string(),
        status: game.status(),
        max_guesses: game.max_guesses(),
        steps,
        unplayed: guesses.len() - played,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{Dictionary, SecretChoice};

    fn apple_dictionary() -> Dictionary {
        Dictionary::new(["apple", "crane", "slate", "plane", "bread"])
            .unwrap()
            .with_secret_choice(SecretChoice::Fixed("apple".to_string()))
            .unwrap()
    }

    #[test]
    fn replay_wins() {
        let result =
            replay_game(apple_dictionary(), GameConfig::default(), &["crane", "apple"]).unwrap();

        assert_eq!(result.status, GameStatus::Won);
        assert_eq!(result.secret, "APPLE");
        assert_eq!(result.guesses_used(), 2);
        assert_eq!(result.unplayed, 0);
    }

    #[test]
    fn replay_loses() {
        let result =
            replay_game(apple_dictionary(), GameConfig::new(2), &["crane", "slate"]).unwrap();

        assert_eq!(result.status, GameStatus::Lost);
        assert_eq!(result.guesses_used(), 2);
    }

    #[test]
    fn replay_in_progress_when_script_runs_out() {
        let result = replay_game(apple_dictionary(), GameConfig::default(), &["crane"]).unwrap();
        assert_eq!(result.status, GameStatus::InProgress);
    }

    #[test]
    fn replay_records_rejections() {
        let result = replay_game(
            apple_dictionary(),
            GameConfig::default(),
            &["abcdef", "zzzzz", "apple"],
        )
        .unwrap();

        assert_eq!(
            result.steps[0].outcome,
            StepOutcome::Rejected(GameError::InvalidLength(6))
        );
        assert_eq!(
            result.steps[1].outcome,
            StepOutcome::Rejected(GameError::NotAWord("ZZZZZ".to_string()))
        );
        assert!(matches!(result.steps[2].outcome, StepOutcome::Accepted(g) if g.is_solved()));
        assert_eq!(result.guesses_used(), 1);
        assert_eq!(result.status, GameStatus::Won);
    }

    #[test]
    fn replay_stops_after_game_ends() {
        let result = replay_game(
            apple_dictionary(),
            GameConfig::default(),
            &["apple", "crane", "slate"],
        )
        .unwrap();

        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.unplayed, 2);
    }

    #[test]
    fn replay_rejects_zero_guesses() {
        let result = replay_game(apple_dictionary(), GameConfig::new(0), &["apple"]);
        assert!(matches!(result, Err(GameError::NoGuessesAllowed)));
    }
}
