use std::collections::{BTreeMap, BTreeSet};

use tokio::sync::RwLock;
use uuid::Uuid;

use bramble_core::domain::{
    AffiliateShop, Article, Author, Category, GalleryImage, Product, Tag,
};

/// All tables of the in-memory store.
///
/// BTree containers keep iteration deterministic, which the list lookups and
/// tests rely on.
#[derive(Default)]
pub(crate) struct Tables {
    pub authors: BTreeMap<Uuid, Author>,
    pub categories: BTreeMap<i32, Category>,
    pub tags: BTreeMap<i32, Tag>,
    pub articles: BTreeMap<Uuid, Article>,
    pub shops: BTreeMap<i32, AffiliateShop>,
    pub products: BTreeMap<i32, Product>,
    /// `(product_id, tag_id)` join rows.
    pub product_tags: BTreeSet<(i32, i32)>,
    pub galleries: BTreeMap<i32, GalleryImage>,
    next_id: i32,
}

impl Tables {
    /// Hand out the next integer primary key. One sequence is shared across
    /// tables; gaps are fine.
    pub fn alloc_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory store behind an async RwLock.
///
/// Note: data is lost on process restart.
pub struct MemoryStore {
    pub(crate) inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Tables::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
