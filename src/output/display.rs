//! Display functions for game progress and outcomes

use super::formatters::{format_guesses, lives_bar, lives_label};
use crate::core::GameState;
use colored::Colorize;
use std::io::{self, Write};

/// Print the state shown before each round
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_turn<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "You have {} left.  {}",
        lives_label(state.lives_left()),
        lives_bar(state.lives_left()).red()
    )?;
    writeln!(out, "\n    {}\n", state.clue().to_string().bright_yellow().bold())?;

    if state.previous_guesses().is_empty() {
        writeln!(out, "No guesses yet.")?;
    } else {
        writeln!(out, "You have already tried these guesses:")?;
        writeln!(out, "{}", format_guesses(state.previous_guesses()))?;
    }
    Ok(())
}

/// Print the win banner
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_win<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    let tries = state.previous_guesses().len();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "    🎉  Congratulations, you won!  🎉".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "\n  The code was {}.", state.code().text().bright_yellow().bold())?;
    writeln!(
        out,
        "  It took you {tries} {}. You had {} left.\n",
        if tries == 1 { "try" } else { "tries" },
        lives_label(state.lives_left())
    )
}

/// Print the loss banner
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_loss<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).red())?;
    writeln!(out, "{}", "    Oh no! You lost.".red().bold())?;
    writeln!(out, "{}", "═".repeat(60).red())?;
    writeln!(out, "\n  The code was {}.", state.code().text().bright_yellow().bold())?;
    writeln!(out, "  Better luck next time.\n")
}

/// Print confirmation after a save
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_saved<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("✓ Game saved as '{name}'.").green())
}

/// Print a numbered list of saves with their progress
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_saves<W: Write>(out: &mut W, saves: &[(String, GameState)]) -> io::Result<()> {
    if saves.is_empty() {
        return writeln!(out, "No saved games.");
    }

    for (i, (name, state)) in saves.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<20} {}  {}",
            (i + 1).to_string().bright_black(),
            name,
            state.clue().compact(),
            lives_label(state.lives_left())
        )?;
    }
    Ok(())
}
