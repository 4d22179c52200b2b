//! Per-letter evaluation results

use std::fmt;

/// Status of one letter of a guess
///
/// - `Correct`: letter is in the secret at this position (green)
/// - `Present`: letter is in the secret at some other position (yellow)
/// - `Absent`: letter is not in the secret (gray)
///
/// `Unevaluated` is the initial marker; an evaluated guess never contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unevaluated,
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Unevaluated => '⬛',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unevaluated => "UNEVALUATED",
            Self::Correct => "CORRECT",
            Self::Present => "PRESENT",
            Self::Absent => "ABSENT",
        };
        f.write_str(name)
    }
}

/// A single letter paired with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    letter: char,
    status: LetterStatus,
}

impl LetterResult {
    /// Build a letter result
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::{LetterResult, LetterStatus};
    ///
    /// let result = LetterResult::new('L', LetterStatus::Absent);
    /// assert_eq!(result.letter(), 'L');
    /// assert_eq!(result.status(), LetterStatus::Absent);
    /// ```
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus) -> Self {
        Self { letter, status }
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn status(self) -> LetterStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_correct(self) -> bool {
        self.status == LetterStatus::Correct
    }
}

impl Default for LetterResult {
    fn default() -> Self {
        Self::new(' ', LetterStatus::Unevaluated)
    }
}
