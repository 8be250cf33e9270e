use std::sync::Arc;

use super::repo_err;
use crate::domain::GalleryImage;
use crate::error::DomainError;
use crate::ports::{FileStorage, GalleryRepository, UploadKind};

/// Gallery lifecycle: the one place where records own files.
///
/// The storage backend is an injected capability so tests can substitute an
/// in-memory double.
pub struct GalleryService {
    galleries: Arc<dyn GalleryRepository>,
    storage: Arc<dyn FileStorage>,
}

impl GalleryService {
    pub fn new(galleries: Arc<dyn GalleryRepository>, storage: Arc<dyn FileStorage>) -> Self {
        Self { galleries, storage }
    }

    /// Store the upload under `gallery/post/<folder>/` and persist the record.
    ///
    /// A storage failure aborts before any record is written, so metadata is
    /// never committed without its file.
    pub async fn add_image(
        &self,
        mut image: GalleryImage,
        filename: &str,
        bytes: &[u8],
    ) -> Result<GalleryImage, DomainError> {
        image.normalize()?;
        let folder = image.folder.as_deref().unwrap_or("");
        let path = self
            .storage
            .store(UploadKind::Post, folder, filename, bytes)
            .await?;
        tracing::debug!(path = %path, "stored gallery upload");
        image.image = Some(path);
        self.galleries
            .save(image)
            .await
            .map_err(|e| repo_err("gallery image", "", e))
    }

    /// Update record metadata without touching the backing file.
    pub async fn save_image(&self, mut image: GalleryImage) -> Result<GalleryImage, DomainError> {
        image.normalize()?;
        self.galleries
            .save(image)
            .await
            .map_err(|e| repo_err("gallery image", "", e))
    }

    /// Delete the backing file first, then the record.
    ///
    /// A missing file fails loudly and leaves the record in place; the
    /// reverse ordering can leave a row pointing at a deleted file after a
    /// crash, which is accepted at this system's scale.
    pub async fn delete_image(&self, id: i32) -> Result<(), DomainError> {
        let image = self
            .galleries
            .find_by_id(id)
            .await
            .map_err(|e| repo_err("gallery image", id, e))?
            .ok_or(DomainError::NotFound {
                entity_type: "gallery image",
                id: id.to_string(),
            })?;

        if let Some(path) = image.image.as_deref() {
            self.storage.delete(path).await?;
            tracing::debug!(path = %path, "deleted gallery file");
        }

        self.galleries
            .delete(id)
            .await
            .map_err(|e| repo_err("gallery image", id, e))
    }

    pub async fn images_in_folder(&self, folder: &str) -> Result<Vec<GalleryImage>, DomainError> {
        self.galleries
            .find_by_folder(folder)
            .await
            .map_err(|e| repo_err("gallery image", folder, e))
    }
}
