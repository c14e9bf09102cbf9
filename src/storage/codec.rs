//! Save-file codec
//!
//! A game is stored as a MessagePack map with named fields, so fields are read
//! by name in any order and unknown fields are ignored.

use crate::core::{Clue, Code, GameState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while encoding or decoding a save
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode game")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("failed to decode game")]
    Decode(#[from] rmp_serde::decode::Error),
    #[error("clue slot {index} holds {slot:?}, expected a single character")]
    BadClueSlot { index: usize, slot: String },
}

/// On-disk shape of a saved game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub code: String,
    pub clue: Vec<String>,
    pub previous_guesses: Vec<String>,
    pub lives_left: u8,
}

impl From<&GameState> for SaveRecord {
    fn from(state: &GameState) -> Self {
        Self {
            code: state.code().text().to_string(),
            clue: state.clue().slots().iter().map(char::to_string).collect(),
            previous_guesses: state.previous_guesses().to_vec(),
            lives_left: state.lives_left(),
        }
    }
}

impl TryFrom<SaveRecord> for GameState {
    type Error = CodecError;

    fn try_from(record: SaveRecord) -> Result<Self, Self::Error> {
        let slots = record
            .clue
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                let mut chars = slot.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(CodecError::BadClueSlot { index, slot }),
                }
            })
            .collect::<Result<Vec<char>, _>>()?;

        Ok(Self::restore(
            Code::new(record.code),
            Clue::from_slots(slots),
            record.previous_guesses,
            record.lives_left,
        ))
    }
}

/// Encode a game as named-field MessagePack
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn serialize(state: &GameState) -> Result<Vec<u8>, CodecError> {
    Ok(rmp_serde::to_vec_named(&SaveRecord::from(state))?)
}

/// Decode a game saved by [`serialize`]
///
/// # Errors
///
/// Returns an error if the bytes are not a save record or a clue slot is not
/// exactly one character.
pub fn deserialize(bytes: &[u8]) -> Result<GameState, CodecError> {
    let record: SaveRecord = rmp_serde::from_slice(bytes)?;
    GameState::try_from(record)
}
