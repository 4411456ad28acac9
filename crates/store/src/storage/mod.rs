//! Storage capabilities for the collection store.
//!
//! The store persists string blobs by key; backends decide the medium.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::errors::StoreError;

/// Trait abstraction for string-blob storage keyed by name.
/// Implementations can be file-backed or in-memory.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the blob under `key`; `Ok(None)` when no value is stored.
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the blob under `key`.
    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub use file::FileStorage;
pub use memory::MemoryStorage;
