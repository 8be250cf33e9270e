use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000003_create_tags_table::Tags;
use crate::m20250601_000006_create_products_table::Products;

static IDX_PRODUCT_TAGS_TAG_ID: &str = "idx_product_tags_tag_id";
static FK_PRODUCT_TAGS_PRODUCT_ID: &str = "fk_product_tags_product_id";
static FK_PRODUCT_TAGS_TAG_ID: &str = "fk_product_tags_tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductTags::Table)
                    .if_not_exists()
                    .col(integer(ProductTags::ProductId))
                    .col(integer(ProductTags::TagId))
                    .primary_key(
                        Index::create()
                            .col(ProductTags::ProductId)
                            .col(ProductTags::TagId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_TAGS_TAG_ID)
                    .table(ProductTags::Table)
                    .col(ProductTags::TagId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_TAGS_PRODUCT_ID)
                    .from_tbl(ProductTags::Table)
                    .from_col(ProductTags::ProductId)
                    .to_tbl(Products::Table)
                    .to_col(Products::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_TAGS_TAG_ID)
                    .from_tbl(ProductTags::Table)
                    .from_col(ProductTags::TagId)
                    .to_tbl(Tags::Table)
                    .to_col(Tags::Id)
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
                    .name(FK_PRODUCT_TAGS_TAG_ID)
                    .table(ProductTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCT_TAGS_PRODUCT_ID)
                    .table(ProductTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_TAGS_TAG_ID)
                    .table(ProductTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductTags::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProductTags {
    Table,
    ProductId,
    TagId,
}
