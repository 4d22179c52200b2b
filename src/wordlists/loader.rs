//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::WORD_LENGTH;
use std::fs;
use std::io;
use std::path::Path;

/// Normalise one word list entry
///
/// Returns the uppercased word, or `None` for blank lines, `#` comments and
/// anything that is not five ASCII letters.
#[must_use]
pub fn normalize_entry(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.starts_with('#')
        || trimmed.len() != WORD_LENGTH
        || !trimmed.chars().all(|c| c.is_ascii_alphabetic())
    {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Load words from a file
///
/// Returns the normalised words, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_rules::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_entry).collect())
}

/// Convert embedded string slice to a normalised word vector
///
/// # Examples
/// ```
/// use wordle_rules::wordlists::loader::words_from_slice;
/// use wordle_rules::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_entry(s)).collect()
}
