use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ensure_max_chars;
use crate::error::DomainError;
use crate::slug::slugify;

/// Category entity - groups both articles and products.
///
/// Name and slug are both unique; the slug is derived from the name exactly
/// once, when no slug has been set yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Zero until first persisted.
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category; the slug is derived at normalization time.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            slug: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Pre-persistence normalization: derive-once slug, bounds checks.
    pub fn normalize(&mut self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "category name must not be empty".into(),
            ));
        }
        ensure_max_chars("name", &self.name, 100)?;
        if self.slug.is_empty() {
            self.slug = slugify(&self.name);
        }
        ensure_max_chars("slug", &self.slug, 100)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_derived_from_name_on_first_normalize() {
        let mut category = Category::new("Home & Kitchen");
        category.normalize().unwrap();
        assert_eq!(category.slug, "home-kitchen");
    }

    #[test]
    fn existing_slug_survives_rename() {
        let mut category = Category::new("Home & Kitchen");
        category.normalize().unwrap();
        category.name = "Kitchenware".to_string();
        category.normalize().unwrap();
        assert_eq!(category.slug, "home-kitchen");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut category = Category::new("   ");
        assert!(matches!(
            category.normalize(),
            Err(DomainError::Validation(_))
        ));
    }
}
