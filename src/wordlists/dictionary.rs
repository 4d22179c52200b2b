//! Dictionary-backed word source
//!
//! A closed list of five-letter words that picks secrets and validates guesses.

use super::loader::{load_from_file, normalize_entry, words_from_slice};
use super::WORDS;
use crate::game::WordSource;
use rand::prelude::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a dictionary picks the secret word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SecretChoice {
    /// A fresh random word every time
    #[default]
    Random,
    /// Deterministic pick from a seeded RNG
    Seeded(u64),
    /// Always the given word
    Fixed(String),
}

/// Errors building a dictionary
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list contains no five-letter words")]
    Empty,

    #[error("Secret word '{0}' is not in the word list")]
    UnknownSecret(String),
}

/// A closed word list acting as the game's [`WordSource`]
///
/// # Examples
/// ```
/// use wordle_rules::game::WordSource;
/// use wordle_rules::wordlists::{Dictionary, SecretChoice};
///
/// let dictionary = Dictionary::embedded()
///     .unwrap()
///     .with_secret_choice(SecretChoice::Fixed("apple".to_string()))
///     .unwrap();
///
/// assert_eq!(dictionary.secret_word(), "APPLE");
/// assert!(dictionary.is_valid_word("CRANE"));
/// assert!(!dictionary.is_valid_word("XXXXX"));
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: FxHashSet<String>,
    choice: SecretChoice,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are normalised to uppercase; invalid ones and duplicates are
    /// dropped.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no valid word remains.
    pub fn new<I, S>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lookup = FxHashSet::default();
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| normalize_entry(entry.as_ref()))
            .filter(|word| lookup.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        debug!(words = words.len(), "dictionary loaded");
        Ok(Self {
            words,
            lookup,
            choice: SecretChoice::Random,
        })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` only if the embedded list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Load a dictionary from a word list file, one word per line
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(words)
    }

    /// Set the secret selection policy
    ///
    /// # Errors
    /// Returns `DictionaryError::UnknownSecret` if a fixed secret is not in
    /// the dictionary.
    pub fn with_secret_choice(mut self, choice: SecretChoice) -> Result<Self, DictionaryError> {
        let choice = match choice {
            SecretChoice::Fixed(word) => {
                let word = word.trim().to_uppercase();
                if !self.contains(&word) {
                    return Err(DictionaryError::UnknownSecret(word));
                }
                SecretChoice::Fixed(word)
            }
            other => other,
        };
        self.choice = choice;
        Ok(self)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_uppercase())
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for Dictionary {
    fn secret_word(&self) -> String {
        let picked = match &self.choice {
            SecretChoice::Fixed(word) => return word.clone(),
            SecretChoice::Random => self.words.choose(&mut rand::rng()),
            SecretChoice::Seeded(seed) => self.words.choose(&mut StdRng::seed_from_u64(*seed)),
        };
        // Never empty: construction rejects empty lists
        picked.cloned().unwrap_or_default()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}
