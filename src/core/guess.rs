//! Guess evaluation against a secret word
//!
//! A guess is the ordered sequence of five letter results produced by
//! comparing a candidate word to the secret, position by position.

use super::letter::{LetterResult, LetterStatus};
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// One evaluated guess: exactly five letter results in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([LetterResult; WORD_LENGTH]);

impl Guess {
    /// Evaluate `candidate` against `secret`
    ///
    /// Each position is judged on its own:
    /// 1. Same letter at the same position → `Correct`
    /// 2. Letter appears anywhere else in the secret → `Present`
    /// 3. Otherwise → `Absent`
    ///
    /// Repeated letters are not budgeted against the secret's letter counts,
    /// so guessing `PPPPP` against `APPLE` marks every `P` correct or present.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::{Guess, LetterStatus, Word};
    ///
    /// let secret = Word::new("APPLE").unwrap();
    /// let guess = Guess::evaluate(&Word::new("EAGLE").unwrap(), &secret);
    ///
    /// assert_eq!(guess[0].status(), LetterStatus::Present);
    /// assert_eq!(guess[2].status(), LetterStatus::Absent);
    /// assert_eq!(guess[4].status(), LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn evaluate(candidate: &Word, secret: &Word) -> Self {
        let mut results = [LetterResult::default(); WORD_LENGTH];

        for (slot, (&letter, &target)) in results
            .iter_mut()
            .zip(candidate.chars().iter().zip(secret.chars()))
        {
            let status = if letter == target {
                LetterStatus::Correct
            } else if secret.has_letter(letter) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
            *slot = LetterResult::new(letter, status);
        }

        Self(results)
    }

    /// Iterate over the letter results in position order
    pub fn iter(&self) -> std::slice::Iter<'_, LetterResult> {
        self.0.iter()
    }

    /// The guessed word, reassembled from its letters
    #[must_use]
    pub fn word(&self) -> String {
        self.iter().copied().map(LetterResult::letter).collect()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.iter().copied().all(LetterResult::is_correct)
    }

    /// Count the letters with a given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.iter().filter(|r| r.status() == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(|r| r.status().to_emoji()).collect()
    }
}

impl std::ops::Index<usize> for Guess {
    type Output = LetterResult;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl<'a> IntoIterator for &'a Guess {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(candidate: &str, secret: &str) -> Guess {
        Guess::evaluate(&Word::new(candidate).unwrap(), &Word::new(secret).unwrap())
    }

    fn statuses(guess: &Guess) -> Vec<LetterStatus> {
        guess.iter().map(|r| r.status()).collect()
    }

    #[test]
    fn correct_letter_in_first_position() {
        let guess = evaluate("A____", "APPLE");
        assert_eq!(guess[0], LetterResult::new('A', LetterStatus::Correct));
    }

    #[test]
    fn present_letter_in_wrong_position() {
        let guess = evaluate("E____", "APPLE");
        assert_eq!(guess[0], LetterResult::new('E', LetterStatus::Present));
    }

    #[test]
    fn absent_letter() {
        let guess = evaluate("Z____", "APPLE");
        assert_eq!(guess[0], LetterResult::new('Z', LetterStatus::Absent));
    }

    #[test]
    fn placeholders_are_absent() {
        let guess = evaluate("A____", "APPLE");
        assert_eq!(guess.count(LetterStatus::Absent), 4);
        assert_eq!(guess.count(LetterStatus::Correct), 1);
    }

    #[test]
    fn all_correct_is_solved() {
        let guess = evaluate("APPLE", "APPLE");
        assert!(guess.is_solved());
        assert_eq!(guess.count(LetterStatus::Correct), 5);
        assert_eq!(guess.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn partial_match_is_not_solved() {
        let guess = evaluate("APPLY", "APPLE");
        assert!(!guess.is_solved());
    }

    #[test]
    fn all_absent() {
        let guess = evaluate("BRICK", "APPLE");
        assert_eq!(guess.count(LetterStatus::Absent), 5);
        assert_eq!(guess.to_emoji(), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn duplicate_letters_are_judged_independently() {
        // APPLE has two P's but every P in the guess is still marked
        let guess = evaluate("PPPPP", "APPLE");
        assert_eq!(
            statuses(&guess),
            vec![
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Present,
                LetterStatus::Present,
            ]
        );
    }

    #[test]
    fn duplicate_letter_in_guess_single_in_secret() {
        // SPEED vs CRANE: CRANE has a single E, both E's come back present
        let guess = evaluate("SPEED", "CRANE");
        assert_eq!(guess[2].status(), LetterStatus::Present);
        assert_eq!(guess[3].status(), LetterStatus::Present);
    }

    #[test]
    fn never_leaves_unevaluated() {
        for candidate in ["CRANE", "A____", "ZZZZZ", "APPLE"] {
            let guess = evaluate(candidate, "APPLE");
            assert_eq!(guess.count(LetterStatus::Unevaluated), 0);
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let secret = Word::new("APPLE").unwrap();
        let candidate = Word::new("PLEAT").unwrap();
        let first = Guess::evaluate(&candidate, &secret);
        let second = Guess::evaluate(&candidate, &secret);
        assert_eq!(first, second);
    }

    #[test]
    fn iterates_in_position_order() {
        let guess = evaluate("LEAPT", "APPLE");
        let mut letters = String::new();
        for result in &guess {
            letters.push(result.letter());
        }
        assert_eq!(letters, "LEAPT");
    }

    #[test]
    fn word_and_display() {
        let guess = evaluate("crane", "slate");
        assert_eq!(guess.word(), "CRANE");
        assert_eq!(guess.to_string(), "CRANE ⬜⬜🟩⬜🟩");
    }
}
