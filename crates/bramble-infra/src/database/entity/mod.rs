//! SeaORM entities mirroring the domain model.

pub mod article;
pub mod author;
pub mod category;
pub mod gallery;
pub mod product;
pub mod product_tag;
pub mod shop;
pub mod tag;
