use std::sync::Arc;

use super::repo_err;
use crate::domain::{AffiliateShop, Product, Tag};
use crate::error::DomainError;
use crate::ports::{ProductRepository, ShopRepository};

/// Affiliate catalog: products and shop registrations.
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
    shops: Arc<dyn ShopRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>, shops: Arc<dyn ShopRepository>) -> Self {
        Self { products, shops }
    }

    pub async fn save_product(&self, mut product: Product) -> Result<Product, DomainError> {
        product.normalize()?;
        tracing::debug!(title = %product.title, slug = %product.slug, "saving product");
        self.products
            .save(product)
            .await
            .map_err(|e| repo_err("product", "", e))
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), DomainError> {
        self.products
            .delete(id)
            .await
            .map_err(|e| repo_err("product", id, e))
    }

    pub async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, DomainError> {
        self.products
            .find_by_slug(slug)
            .await
            .map_err(|e| repo_err("product", slug, e))
    }

    pub async fn featured_products(&self) -> Result<Vec<Product>, DomainError> {
        self.products
            .find_featured()
            .await
            .map_err(|e| repo_err("product", "", e))
    }

    pub async fn products_in_category(&self, category_id: i32) -> Result<Vec<Product>, DomainError> {
        self.products
            .find_by_category(category_id)
            .await
            .map_err(|e| repo_err("product", category_id, e))
    }

    /// Replace the tag set attached to a product.
    pub async fn set_product_tags(
        &self,
        product_id: i32,
        tag_ids: &[i32],
    ) -> Result<(), DomainError> {
        self.products
            .set_tags(product_id, tag_ids)
            .await
            .map_err(|e| repo_err("product", product_id, e))
    }

    pub async fn product_tags(&self, product_id: i32) -> Result<Vec<Tag>, DomainError> {
        self.products
            .tags_for(product_id)
            .await
            .map_err(|e| repo_err("product", product_id, e))
    }

    pub async fn save_shop(&self, mut shop: AffiliateShop) -> Result<AffiliateShop, DomainError> {
        shop.normalize()?;
        self.shops
            .save(shop)
            .await
            .map_err(|e| repo_err("affiliate shop", "", e))
    }

    pub async fn delete_shop(&self, id: i32) -> Result<(), DomainError> {
        self.shops
            .delete(id)
            .await
            .map_err(|e| repo_err("affiliate shop", id, e))
    }

    pub async fn shop_by_reg_id(&self, reg_id: &str) -> Result<Option<AffiliateShop>, DomainError> {
        self.shops
            .find_by_reg_id(reg_id)
            .await
            .map_err(|e| repo_err("affiliate shop", reg_id, e))
    }
}
