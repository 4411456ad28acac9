//! Local collection store: one JSON collection blob per storage key, CRUD
//! with auto-incrementing ids on top of it.
//! - Storage is an injected capability so tests run against memory.
//! - Every mutation is a full-collection overwrite; one logical writer.
//! - Clear error values, never panics, on the failure paths.

pub mod collection_store;
pub mod errors;
pub mod storage;

pub use collection_store::CollectionStore;
pub use errors::StoreError;
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
