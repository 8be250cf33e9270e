use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ensure_max_chars, ensure_max_chars_opt};
use crate::error::DomainError;
use crate::slug::{slugify, truncate_chars};

/// Product entity - an affiliate listing under exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Zero until first persisted.
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub long_description: String,
    pub category_id: i32,
    /// Stored relative path of the product image.
    pub image: String,
    /// One decimal place, e.g. 4.5.
    pub rating: Decimal,
    /// Two decimal places.
    pub price: Option<Decimal>,
    pub affiliate_url: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub meta_title: Option<String>,
    pub meta_tag: Option<String>,
    pub meta_description: Option<String>,
    pub og_title: String,
    pub og_description: String,
}

impl Product {
    pub fn new(title: impl Into<String>, category_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title: title.into(),
            slug: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            category_id,
            image: String::new(),
            rating: Decimal::ZERO,
            price: None,
            affiliate_url: String::new(),
            featured: false,
            created_at: now,
            updated_at: now,
            meta_title: None,
            meta_tag: None,
            meta_description: None,
            og_title: String::new(),
            og_description: String::new(),
        }
    }

    /// Pre-persistence normalization.
    ///
    /// The slug derives from the title once, when still empty. The og pair
    /// defaults to truncated prefixes of title and short description, also
    /// only when still empty, which in practice means on creation.
    pub fn normalize(&mut self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation(
                "product title must not be empty".into(),
            ));
        }
        ensure_max_chars("title", &self.title, 255)?;
        if self.slug.is_empty() {
            self.slug = slugify(&self.title);
        }
        ensure_max_chars("slug", &self.slug, 255)?;
        if self.og_title.is_empty() {
            self.og_title = truncate_chars(&self.title, 70);
        }
        if self.og_description.is_empty() {
            self.og_description = truncate_chars(&self.short_description, 160);
        }
        ensure_max_chars("og_title", &self.og_title, 70)?;
        ensure_max_chars("og_description", &self.og_description, 160)?;
        ensure_max_chars_opt("meta_title", self.meta_title.as_deref(), 160)?;
        ensure_max_chars_opt("meta_tag", self.meta_tag.as_deref(), 255)?;
        ensure_max_chars_opt("meta_description", self.meta_description.as_deref(), 250)?;
        if self.image.is_empty() {
            return Err(DomainError::Validation(
                "product image must not be empty".into(),
            ));
        }
        if self.affiliate_url.is_empty() {
            return Err(DomainError::Validation(
                "affiliate_url must not be empty".into(),
            ));
        }
        if self.rating.is_sign_negative() {
            return Err(DomainError::Validation(
                "rating must not be negative".into(),
            ));
        }
        if self.price.is_some_and(|p| p.is_sign_negative()) {
            return Err(DomainError::Validation("price must not be negative".into()));
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_product(title: &str) -> Product {
        let mut product = Product::new(title, 1);
        product.short_description = "A short blurb.".to_string();
        product.image = "products/widget.jpg".to_string();
        product.affiliate_url = "https://example.com/widget".to_string();
        product
    }

    #[test]
    fn slug_derived_once_and_kept_on_retitle() {
        let mut product = valid_product("Super Widget 3000");
        product.normalize().unwrap();
        assert_eq!(product.slug, "super-widget-3000");

        product.title = "Mega Widget 4000".to_string();
        product.normalize().unwrap();
        assert_eq!(product.slug, "super-widget-3000");
    }

    #[test]
    fn og_fields_default_to_truncated_prefixes() {
        let mut product = valid_product(&"t".repeat(90));
        product.short_description = "d".repeat(200);
        product.normalize().unwrap();
        assert_eq!(product.og_title.chars().count(), 70);
        assert_eq!(product.og_description.chars().count(), 160);
    }

    #[test]
    fn og_fields_only_default_when_empty() {
        let mut product = valid_product("Widget");
        product.og_title = "Hand-written title".to_string();
        product.normalize().unwrap();
        assert_eq!(product.og_title, "Hand-written title");
        assert_eq!(product.og_description, "A short blurb.");
    }

    #[test]
    fn negative_rating_is_rejected() {
        let mut product = valid_product("Widget");
        product.rating = Decimal::new(-5, 1);
        assert!(matches!(product.normalize(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn missing_image_is_rejected() {
        let mut product = valid_product("Widget");
        product.image.clear();
        assert!(matches!(product.normalize(), Err(DomainError::Validation(_))));
    }
}
