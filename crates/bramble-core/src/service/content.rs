use std::sync::Arc;

use uuid::Uuid;

use super::repo_err;
use crate::domain::{Article, Author, Category, Tag};
use crate::error::DomainError;
use crate::ports::{ArticleRepository, AuthorRepository, CategoryRepository, TagRepository};

/// Editorial content: authors, categories, tags, and articles.
pub struct ContentService {
    authors: Arc<dyn AuthorRepository>,
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
    articles: Arc<dyn ArticleRepository>,
}

impl ContentService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        articles: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            authors,
            categories,
            tags,
            articles,
        }
    }

    pub async fn save_author(&self, mut author: Author) -> Result<Author, DomainError> {
        author.normalize()?;
        self.authors
            .save(author)
            .await
            .map_err(|e| repo_err("author", "", e))
    }

    /// Delete an author; dependent articles keep their rows with a null byline.
    pub async fn delete_author(&self, id: Uuid) -> Result<(), DomainError> {
        self.authors
            .delete(id)
            .await
            .map_err(|e| repo_err("author", id, e))
    }

    pub async fn save_category(&self, mut category: Category) -> Result<Category, DomainError> {
        category.normalize()?;
        tracing::debug!(name = %category.name, slug = %category.slug, "saving category");
        self.categories
            .save(category)
            .await
            .map_err(|e| repo_err("category", "", e))
    }

    /// Delete a category. Dependent products are deleted with it; dependent
    /// articles survive with `category_id` set to null.
    pub async fn delete_category(&self, id: i32) -> Result<(), DomainError> {
        self.categories
            .delete(id)
            .await
            .map_err(|e| repo_err("category", id, e))
    }

    pub async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        self.categories
            .find_by_slug(slug)
            .await
            .map_err(|e| repo_err("category", slug, e))
    }

    pub async fn save_tag(&self, mut tag: Tag) -> Result<Tag, DomainError> {
        tag.normalize()?;
        self.tags.save(tag).await.map_err(|e| repo_err("tag", "", e))
    }

    pub async fn delete_tag(&self, id: i32) -> Result<(), DomainError> {
        self.tags.delete(id).await.map_err(|e| repo_err("tag", id, e))
    }

    pub async fn tag_by_slug(&self, slug: &str) -> Result<Option<Tag>, DomainError> {
        self.tags
            .find_by_slug(slug)
            .await
            .map_err(|e| repo_err("tag", slug, e))
    }

    pub async fn save_article(&self, mut article: Article) -> Result<Article, DomainError> {
        article.normalize()?;
        tracing::debug!(id = %article.id, slug = %article.slug, "saving article");
        self.articles
            .save(article)
            .await
            .map_err(|e| repo_err("article", "", e))
    }

    pub async fn delete_article(&self, id: Uuid) -> Result<(), DomainError> {
        self.articles
            .delete(id)
            .await
            .map_err(|e| repo_err("article", id, e))
    }

    pub async fn article_by_slug(&self, slug: &str) -> Result<Option<Article>, DomainError> {
        self.articles
            .find_by_slug(slug)
            .await
            .map_err(|e| repo_err("article", slug, e))
    }

    pub async fn articles_by_author(&self, author_id: Uuid) -> Result<Vec<Article>, DomainError> {
        self.articles
            .find_by_author(author_id)
            .await
            .map_err(|e| repo_err("article", author_id, e))
    }

    /// Record one view of an article.
    pub async fn record_view(&self, id: Uuid) -> Result<(), DomainError> {
        self.articles
            .increment_view_count(id)
            .await
            .map_err(|e| repo_err("article", id, e))
    }
}
