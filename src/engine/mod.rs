//! Round engine
//!
//! Stateless functions over [`GameState`](crate::core::GameState): the rules that
//! validate and apply a guess, and the session loop that asks a [`Player`] for
//! input until the game is won, lost, or saved.

mod rules;
mod session;

pub use rules::{GuessOutcome, apply_guess, is_valid_guess, is_win, validate_guess};
pub use session::{GameStatus, Player, new_game, play, play_turn, status};
