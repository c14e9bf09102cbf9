//! Save listing
//!
//! Loads every save in the store so shells can show progress next to names.

use crate::core::GameState;
use crate::storage::{SaveStore, StorageError};
use tracing::warn;

/// Every readable save with its decoded game, sorted by name
///
/// Malformed records are logged and left out of the listing.
///
/// # Errors
///
/// Returns an error if the directory or a save file cannot be read.
pub fn load_all(store: &SaveStore) -> Result<Vec<(String, GameState)>, StorageError> {
    let mut saves = Vec::new();
    for name in store.list()? {
        match store.load(&name) {
            Ok(state) => saves.push((name, state)),
            Err(e @ StorageError::Malformed { .. }) => {
                warn!(name = %name, error = %e, "skipping unreadable save");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(saves)
}
