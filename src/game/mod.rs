//! Game session lifecycle
//!
//! A [`Game`] owns the secret word, the guess history and the guess cursor. It
//! depends on a [`WordSource`] for the secret and for dictionary checks.

mod error;
mod session;
mod source;

pub use error::GameError;
pub use session::{DEFAULT_MAX_GUESSES, Game, GameConfig, GameStatus};
pub use source::WordSource;
