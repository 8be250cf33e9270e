//! In-memory repository suite - used when no database is configured and as
//! the integration harness in tests.
//!
//! Unlike the Postgres adapters, which lean on native foreign-key actions,
//! these repositories enforce uniqueness and referential integrity with
//! explicit checks and a pre-delete sweep.

mod repos;
mod store;

pub use repos::{
    InMemoryArticleRepository, InMemoryAuthorRepository, InMemoryCategoryRepository,
    InMemoryGalleryRepository, InMemoryProductRepository, InMemoryShopRepository,
    InMemoryTagRepository,
};
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
