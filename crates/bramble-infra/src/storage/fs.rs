//! Local filesystem storage backend.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use bramble_core::ports::{FileStorage, StorageError, UploadKind, upload_path};

use super::StorageConfig;

/// Uploads stored under a media root on the local filesystem.
///
/// The destination directory is created while the upload path is derived;
/// if that fails nothing is stored and the caller must not record the path.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.media_root.clone())
    }

    fn absolute(&self, relative: &str) -> Result<PathBuf, StorageError> {
        // The relative path came from upload_path or the database; a stray
        // traversal component still must not escape the root.
        if Path::new(relative)
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(StorageError::InvalidPath(relative.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FileStorage for FsStorage {
    async fn store(
        &self,
        kind: UploadKind,
        folder: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let relative = upload_path(kind, folder, filename)?;
        let absolute = self.absolute(&relative)?;

        let dir = absolute
            .parent()
            .ok_or_else(|| StorageError::InvalidPath(relative.clone()))?;
        fs::create_dir_all(dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        fs::write(&absolute, bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::debug!(path = %relative, size = bytes.len(), "stored file");
        Ok(relative)
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let absolute = self.absolute(path)?;
        match fs::remove_file(&absolute).await {
            Ok(()) => {
                tracing::debug!(path = %path, "deleted file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn exists(&self, path: &str) -> bool {
        match self.absolute(path) {
            Ok(absolute) => fs::try_exists(&absolute).await.unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_creates_directories_and_returns_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        let path = storage
            .store(UploadKind::Post, "summer", "beach.jpg", b"jpeg-bytes")
            .await
            .unwrap();

        assert_eq!(path, "gallery/post/summer/beach.jpg");
        assert!(dir.path().join(&path).is_file());
        assert!(storage.exists(&path).await);
    }

    #[tokio::test]
    async fn affiliate_kind_uses_its_own_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        let path = storage
            .store(UploadKind::Affiliate, "acme", "logo.png", b"png")
            .await
            .unwrap();

        assert_eq!(path, "gallery/affiliate/acme/logo.png");
    }

    #[tokio::test]
    async fn delete_of_missing_file_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        let path = storage
            .store(UploadKind::Post, "x", "a.bin", b"data")
            .await
            .unwrap();

        storage.delete(&path).await.unwrap();
        assert!(matches!(
            storage.delete(&path).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn traversal_folder_is_rejected_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        let result = storage.store(UploadKind::Post, "..", "a.bin", b"data").await;
        assert!(matches!(result, Err(StorageError::InvalidPath(_))));
    }
}
