//! Integration tests: services wired to the in-memory adapters.

use std::sync::Arc;

use bramble_core::DomainError;
use bramble_core::domain::{AffiliateShop, Article, Author, Category, GalleryImage, Product, Tag};
use bramble_core::ports::FileStorage;
use bramble_core::service::{CatalogService, ContentService, GalleryService};

use crate::memory::{
    InMemoryArticleRepository, InMemoryAuthorRepository, InMemoryCategoryRepository,
    InMemoryGalleryRepository, InMemoryProductRepository, InMemoryShopRepository,
    InMemoryTagRepository, MemoryStore,
};
use crate::storage::InMemoryStorage;

struct Harness {
    content: ContentService,
    catalog: CatalogService,
    gallery: GalleryService,
    storage: Arc<InMemoryStorage>,
}

fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let storage = Arc::new(InMemoryStorage::new());
    let content = ContentService::new(
        Arc::new(InMemoryAuthorRepository::new(store.clone())),
        Arc::new(InMemoryCategoryRepository::new(store.clone())),
        Arc::new(InMemoryTagRepository::new(store.clone())),
        Arc::new(InMemoryArticleRepository::new(store.clone())),
    );
    let catalog = CatalogService::new(
        Arc::new(InMemoryProductRepository::new(store.clone())),
        Arc::new(InMemoryShopRepository::new(store.clone())),
    );
    let gallery = GalleryService::new(
        Arc::new(InMemoryGalleryRepository::new(store)),
        storage.clone(),
    );
    Harness {
        content,
        catalog,
        gallery,
        storage,
    }
}

fn product(title: &str, category_id: i32) -> Product {
    let mut product = Product::new(title, category_id);
    product.short_description = "blurb".to_string();
    product.image = "products/p.jpg".to_string();
    product.affiliate_url = "https://example.com/p".to_string();
    product
}

#[tokio::test]
async fn colliding_category_slugs_are_rejected() {
    let h = harness();
    h.content
        .save_category(Category::new("Hello World"))
        .await
        .unwrap();

    // Different name, same derived slug.
    let result = h.content.save_category(Category::new("hello world!")).await;
    assert!(matches!(result, Err(DomainError::Duplicate(_))));
}

#[tokio::test]
async fn colliding_tag_slugs_are_rejected() {
    let h = harness();
    h.content.save_tag(Tag::new("On Sale")).await.unwrap();
    let result = h.content.save_tag(Tag::new("on: sale")).await;
    assert!(matches!(result, Err(DomainError::Duplicate(_))));
}

#[tokio::test]
async fn colliding_product_slugs_are_rejected() {
    let h = harness();
    let category = h
        .content
        .save_category(Category::new("Gadgets"))
        .await
        .unwrap();

    h.catalog
        .save_product(product("Super Widget", category.id))
        .await
        .unwrap();
    let result = h
        .catalog
        .save_product(product("Super, Widget?", category.id))
        .await;
    assert!(matches!(result, Err(DomainError::Duplicate(_))));
}

#[tokio::test]
async fn category_delete_cascades_to_products_and_nulls_articles() {
    let h = harness();
    let doomed = h
        .content
        .save_category(Category::new("Doomed"))
        .await
        .unwrap();
    let kept = h.content.save_category(Category::new("Kept")).await.unwrap();

    let p1 = h
        .catalog
        .save_product(product("First", doomed.id))
        .await
        .unwrap();
    let p2 = h
        .catalog
        .save_product(product("Second", doomed.id))
        .await
        .unwrap();
    let survivor = h
        .catalog
        .save_product(product("Survivor", kept.id))
        .await
        .unwrap();

    let mut article = Article::new("Linked Post");
    article.category_id = Some(doomed.id);
    let article = h.content.save_article(article).await.unwrap();

    h.content.delete_category(doomed.id).await.unwrap();

    assert!(h.catalog.product_by_slug(&p1.slug).await.unwrap().is_none());
    assert!(h.catalog.product_by_slug(&p2.slug).await.unwrap().is_none());
    assert!(
        h.catalog
            .product_by_slug(&survivor.slug)
            .await
            .unwrap()
            .is_some()
    );

    let article = h
        .content
        .article_by_slug(&article.slug)
        .await
        .unwrap()
        .expect("article row must survive");
    assert_eq!(article.category_id, None);
}

#[tokio::test]
async fn category_delete_with_no_dependents() {
    let h = harness();
    let category = h.content.save_category(Category::new("Empty")).await.unwrap();
    h.content.delete_category(category.id).await.unwrap();
    assert!(h.content.category_by_slug("empty").await.unwrap().is_none());
}

#[tokio::test]
async fn author_delete_nulls_article_byline() {
    let h = harness();
    let author = h
        .content
        .save_author(Author::new(Some("casey".to_string())))
        .await
        .unwrap();

    let mut article = Article::new("Signed Post");
    article.author_id = Some(author.id);
    let article = h.content.save_article(article).await.unwrap();

    h.content.delete_author(author.id).await.unwrap();

    let article = h
        .content
        .article_by_slug(&article.slug)
        .await
        .unwrap()
        .expect("article row must survive");
    assert_eq!(article.author_id, None);
}

#[tokio::test]
async fn product_tags_round_trip_and_tag_delete_detaches() {
    let h = harness();
    let category = h.content.save_category(Category::new("Tech")).await.unwrap();
    let sale = h.content.save_tag(Tag::new("sale")).await.unwrap();
    let tech = h.content.save_tag(Tag::new("tech")).await.unwrap();
    let saved = h
        .catalog
        .save_product(product("Widget", category.id))
        .await
        .unwrap();

    h.catalog
        .set_product_tags(saved.id, &[sale.id, tech.id])
        .await
        .unwrap();
    let tags = h.catalog.product_tags(saved.id).await.unwrap();
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["sale", "tech"]);

    h.content.delete_tag(sale.id).await.unwrap();
    let tags = h.catalog.product_tags(saved.id).await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "tech");
}

#[tokio::test]
async fn unknown_tag_id_is_rejected() {
    let h = harness();
    let category = h.content.save_category(Category::new("Tech")).await.unwrap();
    let saved = h
        .catalog
        .save_product(product("Widget", category.id))
        .await
        .unwrap();

    assert!(h.catalog.set_product_tags(saved.id, &[999]).await.is_err());
}

#[tokio::test]
async fn product_requires_existing_category() {
    let h = harness();
    assert!(h.catalog.save_product(product("Orphan", 42)).await.is_err());
}

#[tokio::test]
async fn view_counter_increments() {
    let h = harness();
    let article = h
        .content
        .save_article(Article::new("Popular"))
        .await
        .unwrap();

    h.content.record_view(article.id).await.unwrap();
    h.content.record_view(article.id).await.unwrap();

    let article = h
        .content
        .article_by_slug("popular")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(article.view_count, 2);
}

#[tokio::test]
async fn featured_products_lookup() {
    let h = harness();
    let category = h.content.save_category(Category::new("Tech")).await.unwrap();
    let mut featured = product("Front Page", category.id);
    featured.featured = true;
    h.catalog.save_product(featured).await.unwrap();
    h.catalog
        .save_product(product("Back Page", category.id))
        .await
        .unwrap();

    let listed = h.catalog.featured_products().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Front Page");
}

#[tokio::test]
async fn shop_lookup_by_registration_id() {
    let h = harness();
    let mut shop = AffiliateShop::new(Some("Acme".to_string()));
    shop.reg_id = Some("REG-7".to_string());
    h.catalog.save_shop(shop).await.unwrap();

    let found = h.catalog.shop_by_reg_id("REG-7").await.unwrap().unwrap();
    assert_eq!(found.shop_name.as_deref(), Some("Acme"));
    assert!(h.catalog.shop_by_reg_id("REG-8").await.unwrap().is_none());
}

#[tokio::test]
async fn gallery_delete_removes_row_and_file() {
    let h = harness();
    let image = GalleryImage::new(Some("Sunset".to_string()), Some("summer".to_string()));
    let saved = h.gallery.add_image(image, "sunset.jpg", b"jpeg").await.unwrap();

    let path = saved.image.clone().unwrap();
    assert_eq!(path, "gallery/post/summer/sunset.jpg");
    assert!(h.storage.exists(&path).await);

    h.gallery.delete_image(saved.id).await.unwrap();
    assert!(!h.storage.exists(&path).await);
    assert!(
        h.gallery
            .images_in_folder("summer")
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn gallery_delete_with_missing_file_surfaces_storage_error() {
    let h = harness();
    let image = GalleryImage::new(None, Some("summer".to_string()));
    let saved = h.gallery.add_image(image, "gone.jpg", b"jpeg").await.unwrap();

    // Simulate the backing file vanishing out from under the record.
    h.storage
        .delete(saved.image.as_deref().unwrap())
        .await
        .unwrap();

    let result = h.gallery.delete_image(saved.id).await;
    assert!(matches!(result, Err(DomainError::Storage(_))));

    // The record stays; the file deletion happens before the row deletion.
    assert_eq!(h.gallery.images_in_folder("summer").await.unwrap().len(), 1);
}

#[tokio::test]
async fn gallery_storage_failure_never_records_metadata() {
    let h = harness();
    let image = GalleryImage::new(None, Some("..".to_string()));
    let result = h.gallery.add_image(image, "evil.jpg", b"jpeg").await;
    assert!(matches!(result, Err(DomainError::Storage(_))));
    assert!(h.gallery.images_in_folder("..").await.unwrap().is_empty());
}
