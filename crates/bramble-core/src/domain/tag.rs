use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ensure_max_chars;
use crate::error::DomainError;
use crate::slug::slugify;

/// Tag entity - free-form label attached to products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Zero until first persisted.
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
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

    /// Pre-persistence normalization; same derive-once rule as `Category`.
    pub fn normalize(&mut self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("tag name must not be empty".into()));
        }
        ensure_max_chars("name", &self.name, 50)?;
        if self.slug.is_empty() {
            self.slug = slugify(&self.name);
        }
        ensure_max_chars("slug", &self.slug, 50)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_derived_once() {
        let mut tag = Tag::new("Hot Deals!");
        tag.normalize().unwrap();
        assert_eq!(tag.slug, "hot-deals");

        tag.name = "Warm Deals".to_string();
        tag.normalize().unwrap();
        assert_eq!(tag.slug, "hot-deals");
    }
}
