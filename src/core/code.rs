//! Secret code representation
//!
//! A Code stores the upper-cased secret word along with letter position indices
//! so single-letter guesses can reveal every occurrence in one lookup.

use rustc_hash::FxHashMap;
use std::fmt;

/// The secret word the player is trying to guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    text: String,
    letters: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

impl Code {
    /// Create a code from any text, upper-casing it
    ///
    /// No length or alphabet check happens here: codes drawn from a word list
    /// are filtered by `wordlists::valid_word`, and restored codes are trusted.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Code;
    ///
    /// let code = Code::new("banana");
    /// assert_eq!(code.text(), "BANANA");
    /// assert_eq!(code.positions_of('A'), &[1, 3, 5]);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into().to_uppercase();
        let letters: Vec<char> = text.chars().collect();

        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            letters,
            letter_positions,
        }
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the code as individual characters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of characters in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether `fragment` appears anywhere in the code
    #[inline]
    #[must_use]
    pub fn contains(&self, fragment: &str) -> bool {
        self.text.contains(fragment)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_upper_cased() {
        let code = Code::new("hello");
        assert_eq!(code.text(), "HELLO");
        assert_eq!(code.letters(), &['H', 'E', 'L', 'L', 'O']);
        assert_eq!(code.len(), 5);
    }

    #[test]
    fn code_positions_of_duplicates() {
        let code = Code::new("BANANA");
        assert_eq!(code.positions_of('A'), &[1, 3, 5]);
        assert_eq!(code.positions_of('N'), &[2, 4]);
        assert_eq!(code.positions_of('B'), &[0]);
        assert_eq!(code.positions_of('Z'), &[]);
    }

    #[test]
    fn code_contains_fragments() {
        let code = Code::new("HELLO");
        assert!(code.contains("L"));
        assert!(code.contains("HELLO"));
        assert!(!code.contains("Z"));
        assert!(!code.contains("HELLA"));
    }

    #[test]
    fn code_equality_ignores_input_case() {
        assert_eq!(Code::new("crane"), Code::new("CRANE"));
        assert_ne!(Code::new("crane"), Code::new("slate"));
    }

    #[test]
    fn code_display() {
        assert_eq!(format!("{}", Code::new("zebra")), "ZEBRA");
    }
}
