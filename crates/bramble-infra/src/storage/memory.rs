//! In-memory storage backend - test double for the filesystem.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bramble_core::ports::{FileStorage, StorageError, UploadKind, upload_path};

/// Files held in a HashMap behind an async RwLock.
///
/// Same path derivation and missing-file semantics as `FsStorage`, without
/// touching a disk.
pub struct InMemoryStorage {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileStorage for InMemoryStorage {
    async fn store(
        &self,
        kind: UploadKind,
        folder: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let relative = upload_path(kind, folder, filename)?;
        let mut files = self.files.write().await;
        files.insert(relative.clone(), bytes.to_vec());
        Ok(relative)
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let mut files = self.files.write().await;
        match files.remove(path) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }

    async fn exists(&self, path: &str) -> bool {
        self.files.read().await.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_and_delete_round_trip() {
        let storage = InMemoryStorage::new();
        let path = storage
            .store(UploadKind::Post, "f", "a.jpg", b"bytes")
            .await
            .unwrap();
        assert_eq!(path, "gallery/post/f/a.jpg");
        assert!(storage.exists(&path).await);

        storage.delete(&path).await.unwrap();
        assert!(!storage.exists(&path).await);
        assert!(matches!(
            storage.delete(&path).await,
            Err(StorageError::NotFound(_))
        ));
    }
}
