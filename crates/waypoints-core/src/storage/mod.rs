//! Storage abstraction for marker persistence.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::codec::CodecError;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Corrupt marker data: {0}")]
    Corrupt(#[from] CodecError),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A place to keep the serialized marker text.
///
/// Access is blocking and single-threaded; callers keep it off the redraw
/// path.
pub trait MarkerStorage {
    /// Read the stored text, or `None` if nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<String>>;

    /// Replace the stored text.
    ///
    /// Implementations must not leave a partially written blob behind.
    fn save(&self, contents: &str) -> StorageResult<()>;

    /// Human readable location, used in log messages.
    fn describe(&self) -> String;
}
