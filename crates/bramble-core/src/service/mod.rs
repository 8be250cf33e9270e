//! Services - orchestration over the ports.
//!
//! Every save runs the entity's `normalize` step first, so derivation and
//! validation happen before any storage write and the adapters stay free of
//! business rules.

mod catalog;
mod content;
mod gallery;

pub use catalog::CatalogService;
pub use content::ContentService;
pub use gallery::GalleryService;

use crate::error::{DomainError, RepoError};

/// Translate an adapter failure into the domain taxonomy.
pub(crate) fn repo_err(entity: &'static str, id: impl ToString, err: RepoError) -> DomainError {
    match err {
        RepoError::Constraint(msg) => DomainError::Duplicate(msg),
        RepoError::NotFound => DomainError::NotFound {
            entity_type: entity,
            id: id.to_string(),
        },
        other => DomainError::Internal(other.to_string()),
    }
}
