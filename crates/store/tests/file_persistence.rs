//! End-to-end persistence through the file backend: collections written by
//! one store instance are visible to a store reopened on the same data dir.

use std::sync::Arc;

use models::book::Book;
use models::fixtures;
use store::{CollectionStore, FileStorage};

fn temp_data_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("store_files_{}", uuid::Uuid::new_v4()))
}

#[tokio::test]
async fn books_survive_reopening_the_store() -> Result<(), anyhow::Error> {
    common::utils::logging::init_logging_default();
    let dir = temp_data_dir();

    let storage = Arc::new(FileStorage::new(&dir).await?);
    let store: CollectionStore<Book> = CollectionStore::new(storage, "books");

    for mut book in fixtures::three_books() {
        book.id = None;
        store.add(book).await?;
    }
    let before = store.get().await?;
    assert_eq!(before.next_id, 4);

    // fresh backend over the same directory sees the same collection
    let reopened = Arc::new(FileStorage::new(&dir).await?);
    let store2: CollectionStore<Book> = CollectionStore::new(reopened, "books");
    let after = store2.get().await?;
    assert_eq!(after, before);

    let deleted = store2.delete(after.items[1].id).await?;
    assert_eq!(deleted.items.len(), 2);
    assert_eq!(deleted.next_id, 4);

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}

#[tokio::test]
async fn file_storage_opens_from_config() -> Result<(), anyhow::Error> {
    common::utils::logging::init_logging_json();
    let dir = temp_data_dir();
    let cfg = configs::StorageConfig { data_dir: dir.to_string_lossy().into_owned() };

    let storage = Arc::new(FileStorage::from_config(&cfg).await?);
    let store: CollectionStore<Book> = CollectionStore::new(storage, "books");

    let mut book = fixtures::one_book()[0].clone();
    book.id = None;
    let stored = store.add(book).await?;
    assert_eq!(stored.id, Some(1));

    let blob = tokio::fs::read_to_string(dir.join("books.json")).await?;
    let expected = models::collection::Collection { next_id: 2, items: fixtures::one_book() };
    assert_eq!(blob, serde_json::to_string(&expected)?);

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}
