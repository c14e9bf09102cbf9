//! Game state: the one entity the engine mutates

use super::{Clue, Code};

/// Lives at the start of every game
pub const MAX_LIVES: u8 = 8;

/// Everything needed to play, display, or persist one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    code: Code,
    clue: Clue,
    previous_guesses: Vec<String>,
    lives_left: u8,
}

impl GameState {
    /// A fresh game for `code`: hidden clue, no guesses, full lives
    #[must_use]
    pub fn new(code: Code) -> Self {
        let clue = Clue::hidden(code.len());
        Self {
            code,
            clue,
            previous_guesses: Vec::new(),
            lives_left: MAX_LIVES,
        }
    }

    /// Rebuild a game from persisted fields, verbatim and unchecked
    #[must_use]
    pub const fn restore(
        code: Code,
        clue: Clue,
        previous_guesses: Vec<String>,
        lives_left: u8,
    ) -> Self {
        Self {
            code,
            clue,
            previous_guesses,
            lives_left,
        }
    }

    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    #[inline]
    #[must_use]
    pub const fn clue(&self) -> &Clue {
        &self.clue
    }

    /// Guesses in the order they were submitted
    #[inline]
    #[must_use]
    pub fn previous_guesses(&self) -> &[String] {
        &self.previous_guesses
    }

    #[inline]
    #[must_use]
    pub const fn lives_left(&self) -> u8 {
        self.lives_left
    }

    pub(crate) const fn clue_mut(&mut self) -> &mut Clue {
        &mut self.clue
    }

    pub(crate) fn record_guess(&mut self, guess: String) {
        self.previous_guesses.push(guess);
    }

    pub(crate) const fn lose_life(&mut self) {
        self.lives_left = self.lives_left.saturating_sub(1);
    }
}
