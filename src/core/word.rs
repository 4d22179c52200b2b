//! Wordle word representation
//!
//! A Word stores a normalised 5-character string along with the set of letters
//! it contains, so evaluation can answer "is this letter anywhere?" directly.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of letters in every secret word and every guess
pub const WORD_LENGTH: usize = 5;

/// A 5-character Wordle word, normalised to uppercase
///
/// Only the length is enforced here. Whether the text is a real word is a
/// question for the [`WordSource`](crate::game::WordSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Each character is uppercased on its own; characters whose uppercase
    /// form is more than one character (`ß`, `ﬁ`) are kept as typed, so the
    /// length checked is always the length of the input.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the text is not exactly 5
    /// characters long.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("ABCDEF").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let chars: Vec<char> = text.as_ref().chars().map(uppercase_char).collect();
        let chars: [char; WORD_LENGTH] = chars
            .try_into()
            .map_err(|rejected: Vec<char>| WordError::InvalidLength(rejected.len()))?;

        let text = chars.iter().collect();
        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

/// Uppercase a single character, keeping it when the mapping would expand
fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), &['C', 'R', 'A', 'N', 'E']);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("ABCDEF"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_accepts_placeholders() {
        // Dictionary membership is not checked here
        let word = Word::new("A____").unwrap();
        assert_eq!(word.chars()[0], 'A');
        assert_eq!(word.chars()[4], '_');
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        let word = Word::new("éclat").unwrap();
        assert_eq!(word.chars()[0], 'É');
        assert_eq!(word.text(), "ÉCLAT");
    }

    #[test]
    fn expanding_uppercase_keeps_input_length() {
        // "ﬁ" and "ß" uppercase to two characters each
        assert_eq!(Word::new("ﬁxed"), Err(WordError::InvalidLength(4)));

        let word = Word::new("straß").unwrap();
        assert_eq!(word.text(), "STRAß");
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("APPLE").unwrap();
        assert!(word.has_letter('A'));
        assert!(word.has_letter('P'));
        assert!(word.has_letter('E'));
        assert!(!word.has_letter('Z'));
        assert!(!word.has_letter('a'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_error_display() {
        let err = WordError::InvalidLength(6);
        assert_eq!(err.to_string(), "Word must be exactly 5 letters, got 6");
    }
}
