use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000002_create_categories_table::Categories;

static IDX_PRODUCTS_CATEGORY_ID: &str = "idx_products_category_id";
static FK_PRODUCTS_CATEGORY_ID: &str = "fk_products_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::Title, 255))
                    .col(string_len_uniq(Products::Slug, 255))
                    .col(text(Products::ShortDescription))
                    .col(text(Products::LongDescription))
                    .col(integer(Products::CategoryId))
                    .col(string_len(Products::Image, 255))
                    .col(decimal_len(Products::Rating, 3, 1))
                    .col(decimal_len_null(Products::Price, 10, 2))
                    .col(string_len(Products::AffiliateUrl, 255))
                    .col(boolean(Products::Featured).default(false).to_owned())
                    .col(timestamp_with_time_zone(Products::CreatedAt))
                    .col(timestamp_with_time_zone(Products::UpdatedAt))
                    .col(string_len_null(Products::MetaTitle, 160))
                    .col(string_len_null(Products::MetaTag, 255))
                    .col(string_len_null(Products::MetaDescription, 250))
                    .col(string_len(Products::OgTitle, 70))
                    .col(string_len(Products::OgDescription, 160))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCTS_CATEGORY_ID)
                    .table(Products::Table)
                    .col(Products::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Deleting a category takes its products with it.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCTS_CATEGORY_ID)
                    .from_tbl(Products::Table)
                    .from_col(Products::CategoryId)
                    .to_tbl(Categories::Table)
                    .to_col(Categories::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCTS_CATEGORY_ID)
                    .table(Products::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCTS_CATEGORY_ID)
                    .table(Products::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Title,
    Slug,
    ShortDescription,
    LongDescription,
    CategoryId,
    Image,
    Rating,
    Price,
    AffiliateUrl,
    Featured,
    CreatedAt,
    UpdatedAt,
    MetaTitle,
    MetaTag,
    MetaDescription,
    OgTitle,
    OgDescription,
}
