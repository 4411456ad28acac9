use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::errors::StoreError;
use crate::storage::StorageBackend;

/// File-backed storage: one `<data_dir>/<key>.json` blob per key.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Initialize against a data directory, creating it if missing.
    pub async fn new<P: Into<PathBuf>>(data_dir: P) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        common::env::ensure_data_dir(&data_dir)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(Self { data_dir })
    }

    pub async fn from_config(cfg: &configs::StorageConfig) -> Result<Self, StoreError> {
        Self::new(cfg.data_dir.clone()).await
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageBackend for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Storage(e.to_string())),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}
