//! Word source collaborator
//!
//! Defines the `WordSource` trait the game session depends on.

/// Supplies the secret word and answers dictionary lookups
///
/// Implementations are expected to be side-effect free from the session's
/// point of view: the session asks for a secret once, at construction, and
/// validates at most once per submitted guess.
pub trait WordSource {
    /// Produce the secret word for a new session (5 uppercase letters)
    fn secret_word(&self) -> String;

    /// Check whether `candidate` is in the accepted dictionary
    ///
    /// The session passes candidates already normalised to uppercase.
    fn is_valid_word(&self, candidate: &str) -> bool;
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn secret_word(&self) -> String {
        (**self).secret_word()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        (**self).is_valid_word(candidate)
    }
}
