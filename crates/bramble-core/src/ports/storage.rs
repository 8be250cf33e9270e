use async_trait::async_trait;

/// Which upload namespace a file lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Post gallery images, under `gallery/post/`.
    Post,
    /// Affiliate shop images, under `gallery/affiliate/`.
    Affiliate,
}

impl UploadKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            UploadKind::Post => "gallery/post",
            UploadKind::Affiliate => "gallery/affiliate",
        }
    }
}

/// Build the relative storage path `<prefix>/<folder>/<filename>`.
///
/// An empty folder collapses to `<prefix>/<filename>`. Components containing
/// path separators or `..` are rejected so a crafted folder name cannot
/// escape the media root.
pub fn upload_path(kind: UploadKind, folder: &str, filename: &str) -> Result<String, StorageError> {
    check_component(folder)?;
    check_component(filename)?;
    if filename.is_empty() {
        return Err(StorageError::InvalidPath("empty filename".into()));
    }
    if folder.is_empty() {
        Ok(format!("{}/{}", kind.prefix(), filename))
    } else {
        Ok(format!("{}/{}/{}", kind.prefix(), folder, filename))
    }
}

fn check_component(part: &str) -> Result<(), StorageError> {
    if part.contains('/') || part.contains('\\') || part == ".." {
        return Err(StorageError::InvalidPath(part.to_string()));
    }
    Ok(())
}

/// File storage trait - abstraction over upload backends (filesystem, in-memory).
///
/// Injected into whichever service manages an entity lifecycle that owns
/// files; there is deliberately no process-wide storage handle.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store `bytes` under the derived upload path and return the relative
    /// path that was recorded. Fails without storing anything if the path
    /// cannot be derived or the destination cannot be created.
    async fn store(
        &self,
        kind: UploadKind,
        folder: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError>;

    /// Delete a previously stored file. A missing file is an error.
    async fn delete(&self, path: &str) -> Result<(), StorageError>;

    /// Check whether a relative path currently exists.
    async fn exists(&self, path: &str) -> bool;
}

/// Storage operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O failure: {0}")]
    Io(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid path component: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_and_affiliate_prefixes() {
        assert_eq!(
            upload_path(UploadKind::Post, "summer", "beach.jpg").unwrap(),
            "gallery/post/summer/beach.jpg"
        );
        assert_eq!(
            upload_path(UploadKind::Affiliate, "acme", "logo.png").unwrap(),
            "gallery/affiliate/acme/logo.png"
        );
    }

    #[test]
    fn empty_folder_collapses() {
        assert_eq!(
            upload_path(UploadKind::Post, "", "a.jpg").unwrap(),
            "gallery/post/a.jpg"
        );
    }

    #[test]
    fn traversal_components_are_rejected() {
        assert!(matches!(
            upload_path(UploadKind::Post, "..", "a.jpg"),
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            upload_path(UploadKind::Post, "x/y", "a.jpg"),
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            upload_path(UploadKind::Post, "ok", ""),
            Err(StorageError::InvalidPath(_))
        ));
    }
}
