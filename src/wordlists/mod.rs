//! Word sources for drawing secret codes
//!
//! Provides the embedded dictionary plus streaming access to user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{
    MAX_CODE_LEN, MAX_DRAWS, MIN_CODE_LEN, WordList, WordListError, generate_code, pick_word,
    valid_word,
};
