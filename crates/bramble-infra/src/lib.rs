//! # Bramble Infrastructure
//!
//! Concrete implementations of the ports defined in `bramble-core`:
//! SeaORM/Postgres repositories, an in-memory repository suite, and the
//! file-storage backends.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL database support via SeaORM
//!
//! Without `postgres` the crate still provides the in-memory store and both
//! storage backends.

pub mod database;
pub mod memory;
pub mod storage;

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;
pub use memory::MemoryStore;
pub use storage::{FsStorage, InMemoryStorage, StorageConfig};
