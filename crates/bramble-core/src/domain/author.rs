use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ensure_max_chars_opt;
use crate::error::DomainError;

/// Author entity - the byline a post can carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub nickname: Option<String>,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with generated ID and timestamps.
    pub fn new(nickname: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nickname,
            profile_pic: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Pre-persistence validation; refreshes the modification timestamp.
    pub fn normalize(&mut self) -> Result<(), DomainError> {
        ensure_max_chars_opt("nickname", self.nickname.as_deref(), 50)?;
        ensure_max_chars_opt("profile_pic", self.profile_pic.as_deref(), 255)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}
