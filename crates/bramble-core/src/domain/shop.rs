use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ensure_max_chars_opt;
use crate::error::DomainError;

/// Affiliate shop registration.
///
/// The logo is a plain string reference, not a managed upload, and the
/// external registration id carries no uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffiliateShop {
    /// Zero until first persisted.
    pub id: i32,
    pub shop_name: Option<String>,
    pub shop_logo: Option<String>,
    pub reg_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AffiliateShop {
    pub fn new(shop_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            shop_name,
            shop_logo: None,
            reg_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Pre-persistence validation; refreshes the modification timestamp.
    pub fn normalize(&mut self) -> Result<(), DomainError> {
        ensure_max_chars_opt("shop_name", self.shop_name.as_deref(), 255)?;
        ensure_max_chars_opt("shop_logo", self.shop_logo.as_deref(), 255)?;
        ensure_max_chars_opt("reg_id", self.reg_id.as_deref(), 255)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}
