//! File storage backends implementing the `FileStorage` port.

mod fs;
mod memory;

pub use fs::FsStorage;
pub use memory::InMemoryStorage;

use std::env;
use std::path::PathBuf;

/// Configuration for the filesystem storage backend.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub media_root: PathBuf,
}

impl StorageConfig {
    /// Load from `MEDIA_ROOT`, defaulting to `media/`.
    pub fn from_env() -> Self {
        Self {
            media_root: env::var("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("media")),
        }
    }
}
