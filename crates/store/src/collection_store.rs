use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{info, warn};

use models::collection::Collection;
use models::record::Record;

use crate::errors::StoreError;
use crate::storage::StorageBackend;

/// CRUD store for one resource collection persisted as a single JSON blob
/// under a fixed key.
///
/// Every operation re-reads the blob, applies the change, and writes the
/// whole collection back. No cache, no partial writes, no transactions:
/// exactly one logical writer is assumed.
pub struct CollectionStore<T: Record> {
    storage: Arc<dyn StorageBackend>,
    key: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> CollectionStore<T> {
    pub fn new(storage: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into(), _record: PhantomData }
    }

    /// Load the collection, materializing `{nextId: 1, items: []}` on first
    /// use. A missing value, a literal `null`, or a corrupt blob all reset to
    /// the empty collection; a well-formed blob is returned without rewriting.
    pub async fn get(&self) -> Result<Collection<T>, StoreError> {
        match self.storage.read(&self.key).await? {
            Some(blob) if blob != "null" => match serde_json::from_str::<Collection<T>>(&blob) {
                Ok(collection) => Ok(collection),
                Err(e) => {
                    warn!(key = %self.key, error = %e, "corrupt collection blob, resetting");
                    self.materialize().await
                }
            },
            _ => self.materialize().await,
        }
    }

    /// Fetch the single item carrying `id`.
    pub async fn get_by_id(&self, id: Option<i64>) -> Result<T, StoreError> {
        let id = id.ok_or(StoreError::MissingParameter)?;
        let collection = self.get().await?;
        collection
            .items
            .into_iter()
            .find(|item| item.id() == Some(id))
            .ok_or(StoreError::not_found(T::ENTITY, id))
    }

    /// Store a new item under the next free id and return it. Any id already
    /// on the incoming item is overwritten.
    pub async fn add(&self, mut item: T) -> Result<T, StoreError> {
        let mut collection = self.get().await?;
        let id = collection.next_id;
        item.set_id(id);
        collection.items.push(item.clone());
        collection.next_id += 1;
        self.persist(&collection).await?;
        info!(entity = T::ENTITY, id, key = %self.key, "added item");
        Ok(item)
    }

    /// Replace the stored item carrying the same id, preserving order.
    /// Nothing is persisted when the id is missing or unknown.
    pub async fn update(&self, item: T) -> Result<Collection<T>, StoreError> {
        let id = item.id().ok_or(StoreError::MissingParameter)?;
        let mut collection = self.get().await?;
        let pos = collection
            .position(id)
            .ok_or(StoreError::not_found(T::ENTITY, id))?;
        collection.items[pos] = item;
        self.persist(&collection).await?;
        info!(entity = T::ENTITY, id, key = %self.key, "updated item");
        Ok(collection)
    }

    /// Remove the item carrying `id`, preserving the order of the rest.
    /// Nothing is persisted when the id is missing or unknown.
    pub async fn delete(&self, id: Option<i64>) -> Result<Collection<T>, StoreError> {
        let id = id.ok_or(StoreError::MissingParameter)?;
        let mut collection = self.get().await?;
        let pos = collection
            .position(id)
            .ok_or(StoreError::not_found(T::ENTITY, id))?;
        collection.items.remove(pos);
        self.persist(&collection).await?;
        info!(entity = T::ENTITY, id, key = %self.key, "deleted item");
        Ok(collection)
    }

    async fn materialize(&self) -> Result<Collection<T>, StoreError> {
        let collection = Collection::new();
        self.persist(&collection).await?;
        Ok(collection)
    }

    async fn persist(&self, collection: &Collection<T>) -> Result<(), StoreError> {
        collection.validate()?;
        let blob =
            serde_json::to_string(collection).map_err(|e| StoreError::Storage(e.to_string()))?;
        self.storage.write(&self.key, &blob).await
    }
}
