//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod storage;

pub use repository::{
    ArticleRepository, AuthorRepository, BaseRepository, CategoryRepository, GalleryRepository,
    ProductRepository, ShopRepository, TagRepository,
};
pub use storage::{FileStorage, StorageError, UploadKind, upload_path};
