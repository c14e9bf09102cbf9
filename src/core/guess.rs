//! Player guesses and why they can be refused

use std::fmt;
use thiserror::Error;

/// A normalized guess: trimmed and upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess(String);

/// Reasons a guess is refused before it touches the game state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be 1 or {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("{0} was already guessed")]
    Repeated(String),
}

impl Guess {
    /// Normalize raw player input
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Guess;
    ///
    /// let guess = Guess::new("  hello\n");
    /// assert_eq!(guess.text(), "HELLO");
    /// assert_eq!(guess.len(), 5);
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The guessed letter, if this is a single-letter guess
    #[must_use]
    pub fn as_letter(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Some(letter),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_is_trimmed_and_upper_cased() {
        assert_eq!(Guess::new(" a ").text(), "A");
        assert_eq!(Guess::new("HeLLo\r\n").text(), "HELLO");
    }

    #[test]
    fn guess_as_letter() {
        assert_eq!(Guess::new("q").as_letter(), Some('Q'));
        assert_eq!(Guess::new("qu").as_letter(), None);
        assert_eq!(Guess::new("").as_letter(), None);
    }

    #[test]
    fn guess_error_messages() {
        let err = GuessError::WrongLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "guess must be 1 or 5 letters, got 3");
        assert_eq!(
            GuessError::Repeated("A".to_string()).to_string(),
            "A was already guessed"
        );
    }
}
