use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AffiliateShop, Article, Author, Category, GalleryImage, Product, Tag};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository. Deleting an author nulls the byline on its articles.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {}

/// Category repository.
///
/// Deleting a category cascades to its products and nulls the reference on
/// its articles; the adapter is responsible for honoring that contract.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, i32> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i32> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, RepoError>;
}

/// Article repository.
#[async_trait]
pub trait ArticleRepository: BaseRepository<Article, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, RepoError>;

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Article>, RepoError>;

    /// Atomically bump the view counter.
    async fn increment_view_count(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Product repository, including the tag many-to-many edge.
#[async_trait]
pub trait ProductRepository: BaseRepository<Product, i32> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, RepoError>;

    async fn find_featured(&self) -> Result<Vec<Product>, RepoError>;

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>, RepoError>;

    /// Replace the product's tag set.
    async fn set_tags(&self, product_id: i32, tag_ids: &[i32]) -> Result<(), RepoError>;

    async fn tags_for(&self, product_id: i32) -> Result<Vec<Tag>, RepoError>;
}

/// Affiliate shop repository.
#[async_trait]
pub trait ShopRepository: BaseRepository<AffiliateShop, i32> {
    async fn find_by_reg_id(&self, reg_id: &str) -> Result<Option<AffiliateShop>, RepoError>;
}

/// Gallery repository.
#[async_trait]
pub trait GalleryRepository: BaseRepository<GalleryImage, i32> {
    async fn find_by_folder(&self, folder: &str) -> Result<Vec<GalleryImage>, RepoError>;
}
