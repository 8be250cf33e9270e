use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use bramble_core::domain::{Article, Category};
use bramble_core::ports::{ArticleRepository, BaseRepository};

use crate::database::entity::{article, category};
use crate::database::postgres_repo::{PostgresArticleRepository, PostgresCategoryRepository};

fn category_model(id: i32, name: &str, slug: &str) -> category::Model {
    let now = chrono::Utc::now();
    category::Model {
        id,
        name: name.to_owned(),
        slug: slug.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn article_model(slug: &str) -> article::Model {
    let now = chrono::Utc::now();
    article::Model {
        id: uuid::Uuid::new_v4(),
        title: "Hello World".to_owned(),
        short_description: "short".to_owned(),
        long_description: "long".to_owned(),
        slug: slug.to_owned(),
        post_date: None,
        is_feature: Some(true),
        is_trending: None,
        tags_json: Some(r#"["sale","tech"]"#.to_owned()),
        meta_title: None,
        meta_tag: None,
        meta_description: None,
        og_title: "Hello World".to_owned(),
        og_description: "short".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
        author_id: None,
        category_id: Some(3),
        view_count: 7,
    }
}

#[tokio::test]
async fn test_find_category_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![category_model(3, "Tech", "tech")]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);

    let result: Option<Category> = repo.find_by_id(3).await.unwrap();

    assert!(result.is_some());
    let category = result.unwrap();
    assert_eq!(category.name, "Tech");
    assert_eq!(category.slug, "tech");
}

#[tokio::test]
async fn test_find_article_by_slug() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![article_model("hello-world")]])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);

    let result: Option<Article> = repo.find_by_slug("hello-world").await.unwrap();

    assert!(result.is_some());
    let article = result.unwrap();
    assert_eq!(article.slug, "hello-world");
    assert_eq!(article.view_count, 7);
    assert_eq!(article.tag_list().unwrap(), vec!["sale", "tech"]);
}

#[tokio::test]
async fn test_save_fresh_article_falls_back_to_insert() {
    // The UPDATE matches no rows (fresh UUID key), then the INSERT returns
    // the stored row.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![
            Vec::<article::Model>::new(),
            vec![article_model("hello-world")],
        ])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);

    let mut article = Article::new("Hello World");
    article.normalize().unwrap();
    let saved = repo.save(article).await.unwrap();
    assert_eq!(saved.slug, "hello-world");

    let log = repo.db.into_transaction_log();
    assert_eq!(log.len(), 2);
    assert!(format!("{:?}", log[0]).contains(r#"UPDATE "articles""#));
    assert!(format!("{:?}", log[1]).contains(r#"INSERT INTO "articles""#));
}

#[tokio::test]
async fn test_increment_view_count_requires_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);

    let id = uuid::Uuid::new_v4();
    repo.increment_view_count(id).await.unwrap();
    assert!(repo.increment_view_count(id).await.is_err());
}
