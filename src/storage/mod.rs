//! Persistence: the save-file codec and the directory of named saves

pub mod codec;
pub mod saves;

pub use codec::{CodecError, SaveRecord, deserialize, serialize};
pub use saves::{SAVE_EXTENSION, SaveStore, StorageError, validate_name};
