use serde::{Deserialize, Serialize};

use super::ensure_max_chars_opt;
use crate::error::DomainError;

/// Gallery image attached to a post, namespaced by a folder grouping key.
///
/// The only entity with custom destruction logic: deleting it also removes
/// the backing file (see `GalleryService::delete_image`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Zero until first persisted.
    pub id: i32,
    pub title: Option<String>,
    pub folder: Option<String>,
    /// Relative storage path, set when the upload is stored.
    pub image: Option<String>,
    pub alt: Option<String>,
}

impl GalleryImage {
    pub fn new(title: Option<String>, folder: Option<String>) -> Self {
        Self {
            id: 0,
            title,
            folder,
            image: None,
            alt: None,
        }
    }

    /// Pre-persistence validation.
    pub fn normalize(&mut self) -> Result<(), DomainError> {
        ensure_max_chars_opt("title", self.title.as_deref(), 100)?;
        ensure_max_chars_opt("folder", self.folder.as_deref(), 100)?;
        ensure_max_chars_opt("alt", self.alt.as_deref(), 300)?;
        Ok(())
    }
}
