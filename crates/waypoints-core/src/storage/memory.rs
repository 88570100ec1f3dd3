//! In-memory marker storage.

use super::{MarkerStorage, StorageError, StorageResult};
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: RwLock<Option<String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory storage that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
        }
    }
}

impl MarkerStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<String>> {
        let contents = self
            .contents
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(contents.clone())
    }

    fn save(&self, contents: &str) -> StorageResult<()> {
        let mut slot = self
            .contents
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        *slot = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
