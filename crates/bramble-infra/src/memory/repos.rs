//! Repository implementations over [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use bramble_core::domain::{
    AffiliateShop, Article, Author, Category, GalleryImage, Product, Tag,
};
use bramble_core::error::RepoError;
use bramble_core::ports::{
    ArticleRepository, AuthorRepository, BaseRepository, CategoryRepository, GalleryRepository,
    ProductRepository, ShopRepository, TagRepository,
};

use super::store::MemoryStore;

/// In-memory author repository.
pub struct InMemoryAuthorRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryAuthorRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.authors.get(&id).cloned())
    }

    async fn save(&self, entity: Author) -> Result<Author, RepoError> {
        let mut tables = self.store.inner.write().await;
        tables.authors.insert(entity.id, entity.clone());
        Ok(entity)
    }

    /// Articles keep their rows; the byline reference is nulled.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.authors.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        for article in tables.articles.values_mut() {
            if article.author_id == Some(id) {
                article.author_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {}

/// In-memory category repository.
pub struct InMemoryCategoryRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryCategoryRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Category, i32> for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn save(&self, entity: Category) -> Result<Category, RepoError> {
        let mut tables = self.store.inner.write().await;
        let mut category = entity;
        let clash = tables
            .categories
            .values()
            .any(|c| c.id != category.id && (c.name == category.name || c.slug == category.slug));
        if clash {
            return Err(RepoError::Constraint(format!(
                "category name or slug already exists: {}",
                category.slug
            )));
        }
        if category.id == 0 {
            category.id = tables.alloc_id();
        }
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    /// Pre-delete sweep: dependent products go with the category, dependent
    /// articles keep their rows with the reference nulled.
    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.categories.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        let doomed: Vec<i32> = tables
            .products
            .values()
            .filter(|p| p.category_id == id)
            .map(|p| p.id)
            .collect();
        for product_id in doomed {
            tables.products.remove(&product_id);
            tables.product_tags.retain(|(p, _)| *p != product_id);
        }

        for article in tables.articles.values_mut() {
            if article.category_id == Some(id) {
                article.category_id = None;
            }
        }

        tracing::debug!(category_id = id, "deleted category with dependent sweep");
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.categories.values().find(|c| c.slug == slug).cloned())
    }
}

/// In-memory tag repository.
pub struct InMemoryTagRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryTagRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Tag, i32> for InMemoryTagRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.tags.get(&id).cloned())
    }

    async fn save(&self, entity: Tag) -> Result<Tag, RepoError> {
        let mut tables = self.store.inner.write().await;
        let mut tag = entity;
        let clash = tables
            .tags
            .values()
            .any(|t| t.id != tag.id && (t.name == tag.name || t.slug == tag.slug));
        if clash {
            return Err(RepoError::Constraint(format!(
                "tag name or slug already exists: {}",
                tag.slug
            )));
        }
        if tag.id == 0 {
            tag.id = tables.alloc_id();
        }
        tables.tags.insert(tag.id, tag.clone());
        Ok(tag)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.tags.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        tables.product_tags.retain(|(_, t)| *t != id);
        Ok(())
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.tags.values().find(|t| t.slug == slug).cloned())
    }
}

/// In-memory article repository.
pub struct InMemoryArticleRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryArticleRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Article, Uuid> for InMemoryArticleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.articles.get(&id).cloned())
    }

    async fn save(&self, entity: Article) -> Result<Article, RepoError> {
        let mut tables = self.store.inner.write().await;
        let clash = tables
            .articles
            .values()
            .any(|a| a.id != entity.id && a.slug == entity.slug);
        if clash {
            return Err(RepoError::Constraint(format!(
                "article slug already exists: {}",
                entity.slug
            )));
        }
        if let Some(author_id) = entity.author_id {
            if !tables.authors.contains_key(&author_id) {
                return Err(RepoError::Constraint("unknown author".to_string()));
            }
        }
        if let Some(category_id) = entity.category_id {
            if !tables.categories.contains_key(&category_id) {
                return Err(RepoError::Constraint("unknown category".to_string()));
            }
        }
        tables.articles.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.articles.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.articles.values().find(|a| a.slug == slug).cloned())
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Article>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables
            .articles
            .values()
            .filter(|a| a.author_id == Some(author_id))
            .cloned()
            .collect())
    }

    async fn increment_view_count(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        let article = tables.articles.get_mut(&id).ok_or(RepoError::NotFound)?;
        article.view_count = article.view_count.saturating_add(1);
        Ok(())
    }
}

/// In-memory affiliate shop repository.
pub struct InMemoryShopRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryShopRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<AffiliateShop, i32> for InMemoryShopRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<AffiliateShop>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.shops.get(&id).cloned())
    }

    async fn save(&self, entity: AffiliateShop) -> Result<AffiliateShop, RepoError> {
        let mut tables = self.store.inner.write().await;
        let mut shop = entity;
        if shop.id == 0 {
            shop.id = tables.alloc_id();
        }
        tables.shops.insert(shop.id, shop.clone());
        Ok(shop)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.shops.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ShopRepository for InMemoryShopRepository {
    async fn find_by_reg_id(&self, reg_id: &str) -> Result<Option<AffiliateShop>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables
            .shops
            .values()
            .find(|s| s.reg_id.as_deref() == Some(reg_id))
            .cloned())
    }
}

/// In-memory product repository.
pub struct InMemoryProductRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryProductRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Product, i32> for InMemoryProductRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.products.get(&id).cloned())
    }

    async fn save(&self, entity: Product) -> Result<Product, RepoError> {
        let mut tables = self.store.inner.write().await;
        let mut product = entity;
        let clash = tables
            .products
            .values()
            .any(|p| p.id != product.id && p.slug == product.slug);
        if clash {
            return Err(RepoError::Constraint(format!(
                "product slug already exists: {}",
                product.slug
            )));
        }
        if !tables.categories.contains_key(&product.category_id) {
            return Err(RepoError::Constraint("unknown category".to_string()));
        }
        if product.id == 0 {
            product.id = tables.alloc_id();
        }
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.products.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        tables.product_tags.retain(|(p, _)| *p != id);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.products.values().find(|p| p.slug == slug).cloned())
    }

    async fn find_featured(&self) -> Result<Vec<Product>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables
            .products
            .values()
            .filter(|p| p.featured)
            .cloned()
            .collect())
    }

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn set_tags(&self, product_id: i32, tag_ids: &[i32]) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if !tables.products.contains_key(&product_id) {
            return Err(RepoError::NotFound);
        }
        for tag_id in tag_ids {
            if !tables.tags.contains_key(tag_id) {
                return Err(RepoError::Constraint(format!("unknown tag id {tag_id}")));
            }
        }
        tables.product_tags.retain(|(p, _)| *p != product_id);
        for tag_id in tag_ids {
            tables.product_tags.insert((product_id, *tag_id));
        }
        Ok(())
    }

    async fn tags_for(&self, product_id: i32) -> Result<Vec<Tag>, RepoError> {
        let tables = self.store.inner.read().await;
        if !tables.products.contains_key(&product_id) {
            return Err(RepoError::NotFound);
        }
        Ok(tables
            .product_tags
            .iter()
            .filter(|(p, _)| *p == product_id)
            .filter_map(|(_, t)| tables.tags.get(t).cloned())
            .collect())
    }
}

/// In-memory gallery repository.
pub struct InMemoryGalleryRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryGalleryRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<GalleryImage, i32> for InMemoryGalleryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<GalleryImage>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables.galleries.get(&id).cloned())
    }

    async fn save(&self, entity: GalleryImage) -> Result<GalleryImage, RepoError> {
        let mut tables = self.store.inner.write().await;
        let mut image = entity;
        if image.id == 0 {
            image.id = tables.alloc_id();
        }
        tables.galleries.insert(image.id, image.clone());
        Ok(image)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.inner.write().await;
        if tables.galleries.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl GalleryRepository for InMemoryGalleryRepository {
    async fn find_by_folder(&self, folder: &str) -> Result<Vec<GalleryImage>, RepoError> {
        let tables = self.store.inner.read().await;
        Ok(tables
            .galleries
            .values()
            .filter(|g| g.folder.as_deref() == Some(folder))
            .cloned()
            .collect())
    }
}
