//! Named save records in a directory
//!
//! Each save is one `<name>.sav` file holding a single encoded game. Saving
//! never replaces an existing record.

use super::codec::{self, CodecError};
use crate::core::GameState;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// File extension of save records
pub const SAVE_EXTENSION: &str = "sav";

const MAX_NAME_LEN: usize = 64;
const RESERVED_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Errors raised by the save store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid save name {0:?}")]
    InvalidName(String),
    #[error("a save named {0:?} already exists")]
    Collision(String),
    #[error("no save named {0:?}")]
    NotFound(String),
    #[error("storage unavailable at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save {name:?} is malformed")]
    Malformed {
        name: String,
        #[source]
        source: CodecError,
    },
}

impl StorageError {
    /// Errors the player can fix by choosing another name
    #[must_use]
    pub const fn is_name_problem(&self) -> bool {
        matches!(self, Self::InvalidName(_) | Self::Collision(_))
    }

    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Check a player-chosen save name and return it trimmed
///
/// Names must be non-empty and at most 64 characters. They may not start with
/// a dot, or contain `..`, path separators, control characters, or characters
/// reserved by common filesystems.
///
/// # Errors
///
/// Returns `InvalidName` for any name that could escape or confuse the save
/// directory.
///
/// # Examples
/// ```
/// use hangman::storage::validate_name;
///
/// assert_eq!(validate_name("  monday ").unwrap(), "monday");
/// assert!(validate_name("../etc/passwd").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<&str, StorageError> {
    let name = name.trim();
    let invalid = name.is_empty()
        || name.chars().count() > MAX_NAME_LEN
        || name.starts_with('.')
        || name.contains("..")
        || name.chars().any(|c| c.is_control() || RESERVED_CHARS.contains(&c));

    if invalid {
        Err(StorageError::InvalidName(name.to_string()))
    } else {
        Ok(name)
    }
}

fn write_record(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes)?;
    file.sync_all()
}

/// Remove a record left half-written so its name stays usable
fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "could not remove partial save");
    }
}

/// A directory of saved games
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{SAVE_EXTENSION}"))
    }

    /// Names of all saves, sorted; a missing directory holds none
    ///
    /// Files whose stem is not an acceptable save name (dot-files, stray
    /// whitespace) are skipped, so every listed name can be loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&self.dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StorageError::io(&self.dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == SAVE_EXTENSION)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                if validate_name(stem).is_ok_and(|name| name == stem) {
                    names.push(stem.to_string());
                } else {
                    debug!(file = %path.display(), "skipping file with unusable save name");
                }
            }
        }
        names.sort();

        debug!(dir = %self.dir.display(), count = names.len(), "listed saves");
        Ok(names)
    }

    /// Check whether a save exists under `name`
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if the name is not acceptable.
    pub fn exists(&self, name: &str) -> Result<bool, StorageError> {
        let name = validate_name(name)?;
        Ok(self.path_for(name).is_file())
    }

    /// Write a new save, refusing to replace an existing one
    ///
    /// Returns the trimmed name the game was stored under.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` or `Collision` for names the player should change,
    /// or an I/O or encoding error otherwise.
    pub fn save(&self, name: &str, state: &GameState) -> Result<String, StorageError> {
        let name = validate_name(name)?;
        let bytes = codec::serialize(state).map_err(|source| StorageError::Malformed {
            name: name.to_string(),
            source,
        })?;

        fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;

        let path = self.path_for(name);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StorageError::Collision(name.to_string()));
            }
            Err(e) => return Err(StorageError::io(&path, e)),
        };
        if let Err(e) = write_record(&mut file, &bytes) {
            drop(file);
            discard_partial(&path);
            return Err(StorageError::io(&path, e));
        }

        info!(name, path = %path.display(), "game saved");
        Ok(name.to_string())
    }

    /// Read and decode the save called `name`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such save, `Malformed` if it cannot be
    /// decoded, or an I/O error.
    pub fn load(&self, name: &str) -> Result<GameState, StorageError> {
        let name = validate_name(name)?;
        let path = self.path_for(name);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(name.to_string()));
            }
            Err(e) => return Err(StorageError::io(&path, e)),
        };

        let state = codec::deserialize(&bytes).map_err(|source| StorageError::Malformed {
            name: name.to_string(),
            source,
        })?;

        info!(name, lives_left = state.lives_left(), "game loaded");
        Ok(state)
    }

    /// Delete the save called `name`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such save, or an I/O error.
    pub fn remove(&self, name: &str) -> Result<(), StorageError> {
        let name = validate_name(name)?;
        let path = self.path_for(name);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(name, "save removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Guess};
    use crate::engine::apply_guess;

    fn sample_state() -> GameState {
        let mut state = GameState::new(Code::new("HELLO"));
        apply_guess(&mut state, &Guess::new("l"));
        apply_guess(&mut state, &Guess::new("q"));
        state
    }

    #[test]
    fn save_then_load() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path().join("saves"));
        let state = sample_state();

        assert_eq!(store.save("monday", &state).unwrap(), "monday");
        assert!(store.exists("monday").unwrap());
        assert_eq!(store.load("monday").unwrap(), state);
    }

    #[test]
    fn save_never_overwrites() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path());
        let first = sample_state();

        store.save("slot", &first).unwrap();
        let err = store
            .save("slot", &GameState::new(Code::new("WORLD")))
            .unwrap_err();

        assert!(matches!(err, StorageError::Collision(ref name) if name == "slot"));
        assert!(err.is_name_problem());
        assert_eq!(store.load("slot").unwrap(), first);
    }

    #[test]
    fn list_is_sorted_and_ignores_other_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path());
        let state = sample_state();

        store.save("zeta", &state).unwrap();
        store.save("alpha", &state).unwrap();
        fs::write(temp.path().join("notes.txt"), "hi").unwrap();

        assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn list_skips_files_with_unusable_names() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path());
        store.save("good", &sample_state()).unwrap();
        let bytes = fs::read(temp.path().join("good.sav")).unwrap();
        for stray in [".backup.sav", ".DS_Store.sav", "spaced .sav", "a..b.sav"] {
            fs::write(temp.path().join(stray), &bytes).unwrap();
        }

        let names = store.list().unwrap();
        assert_eq!(names, vec!["good"]);
        for name in &names {
            assert!(store.load(name).is_ok(), "{name:?} listed but not loadable");
        }
    }

    #[test]
    fn discard_partial_removes_the_record() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path());
        let path = store.path_for("half");
        fs::write(&path, b"\x84").unwrap();

        discard_partial(&path);

        assert!(!store.exists("half").unwrap());
        store.save("half", &sample_state()).unwrap();
        assert_eq!(store.load("half").unwrap(), sample_state());
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path().join("nowhere"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn load_missing_save() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path());
        assert!(matches!(store.load("ghost"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn load_corrupt_save() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path());
        fs::write(temp.path().join("broken.sav"), b"\xc1garbage").unwrap();

        assert!(matches!(
            store.load("broken"),
            Err(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn remove_deletes_the_record() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path());
        store.save("done", &sample_state()).unwrap();

        store.remove("done").unwrap();
        assert!(!store.exists("done").unwrap());
        assert!(matches!(store.remove("done"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn names_are_trimmed() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = SaveStore::new(temp.path());

        assert_eq!(store.save("  lunch break ", &sample_state()).unwrap(), "lunch break");
        assert_eq!(store.list().unwrap(), vec!["lunch break"]);
    }

    #[test]
    fn unsafe_names_are_rejected() {
        let long = "x".repeat(65);
        for name in [
            "", "   ", "../up", "a/b", "a\\b", ".hidden", "tab\there", "what?", long.as_str(),
        ] {
            assert!(
                matches!(validate_name(name), Err(StorageError::InvalidName(_))),
                "{name:?} accepted"
            );
        }
    }

    #[test]
    fn ordinary_names_are_accepted() {
        for name in ["game1", "Sunday night", "mañana", "a.b"] {
            assert!(validate_name(name).is_ok(), "{name:?} rejected");
        }
    }
}
