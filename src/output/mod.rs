//! Terminal output formatting
//!
//! Rendering of turns, outcomes and save listings for the console shell.

pub mod display;
pub mod formatters;

pub use display::{write_loss, write_saved, write_saves, write_turn, write_win};
