//! Word list loading and code generation
//!
//! Words are drawn with reservoir sampling, so a list is streamed once and never
//! held in memory as a whole.

use super::WORDS;
use crate::core::Code;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Shortest acceptable code
pub const MIN_CODE_LEN: usize = 5;

/// Codes must be strictly shorter than this
pub const MAX_CODE_LEN: usize = 13;

/// Draws attempted by [`generate_code`] before giving up
pub const MAX_DRAWS: usize = 1_000;

/// Errors raised while drawing a code
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list is empty")]
    Empty,
    #[error(
        "no lower-case word of {min}..{max} letters found in {0} draws",
        min = MIN_CODE_LEN,
        max = MAX_CODE_LEN
    )]
    NoValidWord(usize),
}

/// Where secret codes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordList {
    /// The dictionary compiled into the binary
    Embedded,
    /// A line-oriented text file, one word per line
    File(PathBuf),
}

impl WordList {
    /// Parse the `--wordlist` argument: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Draw one line uniformly at random, or `None` if the list is empty
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file-backed list cannot be opened or read.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<String>, WordListError> {
        match self {
            Self::Embedded => Ok(pick_word(WORDS.iter().copied(), rng)),
            Self::File(path) => pick_from_file(path, rng),
        }
    }
}

fn pick_from_file<R: Rng + ?Sized>(
    path: &Path,
    rng: &mut R,
) -> Result<Option<String>, WordListError> {
    let io_err = |source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    // Stop at the first read error and report it once the sampler is done
    let mut read_error = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            read_error = Some(e);
            None
        }
    });
    let word = pick_word(lines, rng);

    match read_error {
        Some(source) => Err(io_err(source)),
        None => Ok(word),
    }
}

/// Pick one record uniformly with reservoir sampling
///
/// Record `i` (0-based) replaces the held candidate with probability `1/(i+1)`.
/// Trailing whitespace, including a stray `\r`, is stripped from the winner.
///
/// # Examples
/// ```
/// use hangman::wordlists::pick_word;
///
/// let mut rng = rand::rng();
/// let word = pick_word(["only"], &mut rng);
/// assert_eq!(word.as_deref(), Some("only"));
///
/// assert_eq!(pick_word(Vec::<String>::new(), &mut rng), None);
/// ```
pub fn pick_word<I, S, R>(lines: I, rng: &mut R) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut chosen = None;
    for (i, line) in lines.into_iter().enumerate() {
        if rng.random_range(0..=i) == 0 {
            chosen = Some(line.as_ref().trim_end().to_string());
        }
    }
    chosen
}

/// Check whether a raw line can serve as a code
///
/// The upper-cased length must be in `[MIN_CODE_LEN, MAX_CODE_LEN)` characters,
/// since letters like `ß` grow when upper-cased, and the line must not contain
/// upper-case characters (those mark proper nouns).
///
/// # Examples
/// ```
/// use hangman::wordlists::valid_word;
///
/// assert!(valid_word("abcde"));
/// assert!(!valid_word("jazz"));
/// assert!(!valid_word("Paris"));
/// ```
#[must_use]
pub fn valid_word(word: &str) -> bool {
    let len = word.to_uppercase().chars().count();
    (MIN_CODE_LEN..MAX_CODE_LEN).contains(&len) && word == word.to_lowercase()
}

/// Draw words until one is valid and return it upper-cased
///
/// # Errors
///
/// Returns `Empty` for an empty list, `NoValidWord` after [`MAX_DRAWS`]
/// unusable draws, or an I/O error from a file-backed list.
pub fn generate_code<R: Rng + ?Sized>(
    words: &WordList,
    rng: &mut R,
) -> Result<Code, WordListError> {
    for draw in 1..=MAX_DRAWS {
        let Some(word) = words.pick(rng)? else {
            return Err(WordListError::Empty);
        };

        if valid_word(&word) {
            debug!(draw, len = word.len(), "drew code");
            return Ok(Code::new(word));
        }
        trace!(draw, %word, "rejected candidate");
    }

    Err(WordListError::NoValidWord(MAX_DRAWS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn word_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        for line in lines {
            writeln!(file, "{line}").expect("write");
        }
        file
    }

    #[test]
    fn valid_word_bounds() {
        assert!(!valid_word("jazz"));
        assert!(valid_word("abcde"));
        assert!(valid_word("abcdefghijkl")); // 12
        assert!(!valid_word("abcdefghijklm")); // 13
        assert!(!valid_word(""));
    }

    #[test]
    fn valid_word_rejects_upper_case() {
        assert!(!valid_word("August"));
        assert!(!valid_word("HELLO"));
        assert!(valid_word("hello"));
    }

    #[test]
    fn valid_word_measures_upper_cased_length() {
        assert!(valid_word("abcdefghijß")); // ABCDEFGHIJSS, 12
        assert!(!valid_word("abcdefghijkß")); // ABCDEFGHIJKSS, 13
    }

    #[test]
    fn generate_code_never_exceeds_max_length() {
        let words = word_file(&["abcdefghijkß", "hello"]);
        let list = WordList::File(words.path().to_path_buf());
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let code = generate_code(&list, &mut rng).unwrap();
            assert_eq!(code.text(), "HELLO");
            assert!(code.len() < MAX_CODE_LEN);
        }
    }

    #[test]
    fn pick_word_single_line() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_word(["zebra"], &mut rng).as_deref(), Some("zebra"));
    }

    #[test]
    fn pick_word_strips_line_terminator() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_word(["zebra\r"], &mut rng).as_deref(), Some("zebra"));
    }

    #[test]
    fn pick_word_covers_every_line() {
        let lines = ["alpha", "bravo", "charlie", "delta"];
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 4];

        for _ in 0..4_000 {
            let word = pick_word(lines, &mut rng).unwrap();
            let idx = lines.iter().position(|&l| l == word).unwrap();
            counts[idx] += 1;
        }

        // Uniform: each line near 1000 picks
        for count in counts {
            assert!((800..1200).contains(&count), "skewed counts {counts:?}");
        }
    }

    #[test]
    fn generate_code_skips_invalid_words() {
        let words = word_file(&["jazz", "Paris", "abcde"]);
        let list = WordList::File(words.path().to_path_buf());
        let mut rng = StdRng::seed_from_u64(1);

        let code = generate_code(&list, &mut rng).unwrap();
        assert_eq!(code.text(), "ABCDE");
    }

    #[test]
    fn generate_code_rejects_four_letter_list() {
        let words = word_file(&["jazz"]);
        let list = WordList::File(words.path().to_path_buf());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            generate_code(&list, &mut rng),
            Err(WordListError::NoValidWord(MAX_DRAWS))
        ));
    }

    #[test]
    fn generate_code_empty_list() {
        let words = word_file(&[]);
        let list = WordList::File(words.path().to_path_buf());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            generate_code(&list, &mut rng),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn generate_code_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let list = WordList::File(dir.path().join("missing.txt"));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            generate_code(&list, &mut rng),
            Err(WordListError::Io { .. })
        ));
    }

    #[test]
    fn generate_code_from_embedded_list() {
        let mut rng = StdRng::seed_from_u64(99);
        let code = generate_code(&WordList::Embedded, &mut rng).unwrap();

        assert!((MIN_CODE_LEN..MAX_CODE_LEN).contains(&code.len()));
        assert_eq!(code.text(), code.text().to_uppercase());
    }

    #[test]
    fn word_list_from_arg() {
        assert_eq!(WordList::from_arg("embedded"), WordList::Embedded);
        assert_eq!(
            WordList::from_arg("words.txt"),
            WordList::File(PathBuf::from("words.txt"))
        );
    }
}
