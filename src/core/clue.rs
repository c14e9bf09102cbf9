//! The player-visible, partially revealed rendering of the code

use super::Code;
use std::fmt;

/// Symbol shown for a position that has not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Revealed letters of the code, one slot per code position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue(Vec<char>);

impl Clue {
    /// A clue with every position hidden
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self(vec![PLACEHOLDER; len])
    }

    /// Rebuild a clue from stored slots, verbatim
    #[must_use]
    pub const fn from_slots(slots: Vec<char>) -> Self {
        Self(slots)
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[char] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once no position holds the placeholder
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&PLACEHOLDER)
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.0.iter().filter(|&&c| c == PLACEHOLDER).count()
    }

    /// Reveal `letter` at each of `positions`, ignoring out-of-range indices
    pub fn reveal(&mut self, letter: char, positions: &[usize]) {
        for &i in positions {
            if let Some(slot) = self.0.get_mut(i) {
                *slot = letter;
            }
        }
    }

    /// Replace the whole clue with the letters of `code`
    pub fn reveal_all(&mut self, code: &Code) {
        self.0 = code.letters().to_vec();
    }

    /// The clue as a compact string, e.g. `__LL_`
    #[must_use]
    pub fn compact(&self) -> String {
        self.0.iter().collect()
    }
}

/// Slots joined by single spaces, e.g. `_ _ L L _`
impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}
