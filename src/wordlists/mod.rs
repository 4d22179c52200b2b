//! Word lists for Wordle
//!
//! Provides the embedded dictionary compiled into the binary and a
//! [`Dictionary`] word source built on top of any word list.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError, SecretChoice};
pub use embedded::{WORDS, WORDS_COUNT};
