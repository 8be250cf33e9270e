//! Domain entities - the core content objects.

mod article;
mod author;
mod category;
mod gallery;
mod product;
mod shop;
mod tag;

pub use article::Article;
pub use author::Author;
pub use category::Category;
pub use gallery::GalleryImage;
pub use product::Product;
pub use shop::AffiliateShop;
pub use tag::Tag;

use crate::error::DomainError;

/// Reject a field value longer than `max` characters.
pub(crate) fn ensure_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} exceeds {max} characters"
        )));
    }
    Ok(())
}

/// Like [`ensure_max_chars`] for optional fields.
pub(crate) fn ensure_max_chars_opt(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), DomainError> {
    match value {
        Some(v) => ensure_max_chars(field, v, max),
        None => Ok(()),
    }
}
