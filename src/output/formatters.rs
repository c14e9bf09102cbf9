//! Formatting utilities for terminal output

use crate::core::MAX_LIVES;

/// Lives as a row of hearts, e.g. `♥♥♥♡♡♡♡♡`
#[must_use]
pub fn lives_bar(lives_left: u8) -> String {
    let filled = usize::from(lives_left.min(MAX_LIVES));
    let empty = usize::from(MAX_LIVES) - filled;
    format!("{}{}", "♥".repeat(filled), "♡".repeat(empty))
}

/// Previous guesses as a comma-separated list
#[must_use]
pub fn format_guesses(guesses: &[String]) -> String {
    guesses.join(", ")
}

/// `1 life` / `3 lives`
#[must_use]
pub fn lives_label(lives_left: u8) -> String {
    if lives_left == 1 {
        "1 life".to_string()
    } else {
        format!("{lives_left} lives")
    }
}
