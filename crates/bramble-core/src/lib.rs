//! # Bramble Core
//!
//! The domain layer of the Bramble content backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! content entities, the slug and normalization rules, port traits, and the
//! services that run normalization before anything touches a store.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod slug;

pub use error::DomainError;
