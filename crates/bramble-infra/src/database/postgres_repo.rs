//! PostgreSQL repository implementations.
//!
//! Referential integrity on delete (cascade to products, null on articles)
//! is enforced by the foreign-key actions declared in the migrations, so the
//! repositories here stay plain CRUD plus lookups.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};

use bramble_core::domain::{AffiliateShop, Article, Category, GalleryImage, Product, Tag};
use bramble_core::error::RepoError;
use bramble_core::ports::{
    ArticleRepository, AuthorRepository, CategoryRepository, GalleryRepository, ProductRepository,
    ShopRepository, TagRepository,
};

use super::entity::article::{self, Entity as ArticleEntity};
use super::entity::author::Entity as AuthorEntity;
use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::gallery::{self, Entity as GalleryEntity};
use super::entity::product::{self, Entity as ProductEntity};
use super::entity::product_tag::{self, Entity as ProductTagEntity};
use super::entity::shop::{self, Entity as ShopEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL tag repository.
pub type PostgresTagRepository = PostgresBaseRepository<TagEntity>;

/// PostgreSQL article repository.
pub type PostgresArticleRepository = PostgresBaseRepository<ArticleEntity>;

/// PostgreSQL affiliate shop repository.
pub type PostgresShopRepository = PostgresBaseRepository<ShopEntity>;

/// PostgreSQL product repository.
pub type PostgresProductRepository = PostgresBaseRepository<ProductEntity>;

/// PostgreSQL gallery repository.
pub type PostgresGalleryRepository = PostgresBaseRepository<GalleryEntity>;

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        tracing::debug!(slug = %slug, "Finding category by slug");
        let result = CategoryEntity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, RepoError> {
        let result = TagEntity::find()
            .filter(tag::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, RepoError> {
        tracing::debug!(slug = %slug, "Finding article by slug");
        let result = ArticleEntity::find()
            .filter(article::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_by_author(&self, author_id: uuid::Uuid) -> Result<Vec<Article>, RepoError> {
        let result = ArticleEntity::find()
            .filter(article::Column::AuthorId.eq(author_id))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn increment_view_count(&self, id: uuid::Uuid) -> Result<(), RepoError> {
        let result = ArticleEntity::update_many()
            .col_expr(
                article::Column::ViewCount,
                Expr::col(article::Column::ViewCount).add(1),
            )
            .filter(article::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ShopRepository for PostgresShopRepository {
    async fn find_by_reg_id(&self, reg_id: &str) -> Result<Option<AffiliateShop>, RepoError> {
        let result = ShopEntity::find()
            .filter(shop::Column::RegId.eq(reg_id))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, RepoError> {
        let result = ProductEntity::find()
            .filter(product::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_featured(&self) -> Result<Vec<Product>, RepoError> {
        let result = ProductEntity::find()
            .filter(product::Column::Featured.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>, RepoError> {
        let result = ProductEntity::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn set_tags(&self, product_id: i32, tag_ids: &[i32]) -> Result<(), RepoError> {
        ProductTagEntity::delete_many()
            .filter(product_tag::Column::ProductId.eq(product_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let rows = tag_ids.iter().map(|tag_id| product_tag::ActiveModel {
            product_id: Set(product_id),
            tag_id: Set(*tag_id),
        });

        ProductTagEntity::insert_many(rows)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }

    async fn tags_for(&self, product_id: i32) -> Result<Vec<Tag>, RepoError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        let result = product
            .find_related(TagEntity)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl GalleryRepository for PostgresGalleryRepository {
    async fn find_by_folder(&self, folder: &str) -> Result<Vec<GalleryImage>, RepoError> {
        let result = GalleryEntity::find()
            .filter(gallery::Column::Folder.eq(folder))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
