pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_authors_table;
mod m20250601_000002_create_categories_table;
mod m20250601_000003_create_tags_table;
mod m20250601_000004_create_articles_table;
mod m20250601_000005_create_affiliate_shops_table;
mod m20250601_000006_create_products_table;
mod m20250601_000007_create_product_tags_table;
mod m20250601_000008_create_galleries_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_authors_table::Migration),
            Box::new(m20250601_000002_create_categories_table::Migration),
            Box::new(m20250601_000003_create_tags_table::Migration),
            Box::new(m20250601_000004_create_articles_table::Migration),
            Box::new(m20250601_000005_create_affiliate_shops_table::Migration),
            Box::new(m20250601_000006_create_products_table::Migration),
            Box::new(m20250601_000007_create_product_tags_table::Migration),
            Box::new(m20250601_000008_create_galleries_table::Migration),
        ]
    }
}
