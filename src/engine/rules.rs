//! Guess validation and clue revelation

use crate::core::{GameState, Guess, GuessError};
use tracing::debug;

/// What a single applied guess did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A letter was found at `positions` places
    Revealed { positions: usize },
    /// The full word was guessed
    Solved,
    /// Not in the code; a life was lost
    Miss,
}

/// True once every clue position is revealed
#[must_use]
pub fn is_win(state: &GameState) -> bool {
    state.clue().is_complete()
}

/// Check a guess against the length rule and the guess history
///
/// A guess is either a single letter or as long as the code, and must not
/// repeat an earlier guess.
///
/// # Errors
///
/// Returns the reason the guess is refused.
pub fn validate_guess(state: &GameState, guess: &Guess) -> Result<(), GuessError> {
    let expected = state.code().len();
    let actual = guess.len();
    if actual != 1 && actual != expected {
        return Err(GuessError::WrongLength { expected, actual });
    }

    if state
        .previous_guesses()
        .iter()
        .any(|prev| prev == guess.text())
    {
        return Err(GuessError::Repeated(guess.text().to_string()));
    }

    Ok(())
}

#[must_use]
pub fn is_valid_guess(state: &GameState, guess: &Guess) -> bool {
    validate_guess(state, guess).is_ok()
}

/// Record a guess and update the clue or lives
///
/// A letter reveals every position it occupies; a whole word that matches
/// reveals the full code. Anything else costs one life. Callers are expected
/// to run [`validate_guess`] first.
pub fn apply_guess(state: &mut GameState, guess: &Guess) -> GuessOutcome {
    state.record_guess(guess.text().to_string());

    let outcome = if !state.code().contains(guess.text()) {
        state.lose_life();
        GuessOutcome::Miss
    } else if let Some(letter) = guess.as_letter() {
        let positions = state.code().positions_of(letter).to_vec();
        state.clue_mut().reveal(letter, &positions);
        GuessOutcome::Revealed {
            positions: positions.len(),
        }
    } else {
        let code = state.code().clone();
        state.clue_mut().reveal_all(&code);
        GuessOutcome::Solved
    };

    debug!(
        guess = guess.text(),
        ?outcome,
        lives_left = state.lives_left(),
        "applied guess"
    );
    outcome
}
