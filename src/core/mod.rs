//! Core domain types for Wordle
//!
//! Words, letter results and guess evaluation. Everything here is pure and has
//! no knowledge of dictionaries or game state.

mod guess;
mod letter;
mod word;

pub use guess::Guess;
pub use letter::{LetterResult, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
