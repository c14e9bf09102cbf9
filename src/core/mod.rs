//! Core domain types for Hangman
//!
//! The game is a plain data entity (`GameState`) built from a handful of small
//! newtypes. Nothing in here performs I/O; the engine and the shells drive it.

mod clue;
mod code;
mod guess;
mod state;

pub use clue::{Clue, PLACEHOLDER};
pub use code::Code;
pub use guess::{Guess, GuessError};
pub use state::{GameState, MAX_LIVES};
