//! Wordle Rules
//!
//! The rules engine of a Wordle-style game: evaluate guesses against a secret
//! word, keep the guess history, and decide when the game is won or lost.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rules::game::{Game, GameStatus};
//! use wordle_rules::wordlists::{Dictionary, SecretChoice};
//!
//! let dictionary = Dictionary::embedded()?
//!     .with_secret_choice(SecretChoice::Fixed("apple".to_string()))?;
//! let mut game = Game::new(&dictionary)?;
//!
//! let guess = game.submit_guess("plane")?;
//! println!("{guess}");
//!
//! game.submit_guess("apple")?;
//! assert_eq!(game.status(), GameStatus::Won);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core domain types
pub mod core;

// Game session lifecycle
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
