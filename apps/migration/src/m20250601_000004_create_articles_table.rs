use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_authors_table::Authors;
use crate::m20250601_000002_create_categories_table::Categories;

static IDX_ARTICLES_AUTHOR_ID: &str = "idx_articles_author_id";
static IDX_ARTICLES_CATEGORY_ID: &str = "idx_articles_category_id";
static FK_ARTICLES_AUTHOR_ID: &str = "fk_articles_author_id";
static FK_ARTICLES_CATEGORY_ID: &str = "fk_articles_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(pk_uuid(Articles::Id))
                    .col(string_len(Articles::Title, 255))
                    .col(text(Articles::ShortDescription))
                    .col(text(Articles::LongDescription))
                    .col(string_len_uniq(Articles::Slug, 255))
                    .col(date_null(Articles::PostDate))
                    .col(boolean_null(Articles::IsFeature))
                    .col(boolean_null(Articles::IsTrending))
                    .col(string_len_null(Articles::TagsJson, 200))
                    .col(string_len_null(Articles::MetaTitle, 160))
                    .col(string_len_null(Articles::MetaTag, 255))
                    .col(string_len_null(Articles::MetaDescription, 250))
                    .col(string_len(Articles::OgTitle, 70))
                    .col(string_len(Articles::OgDescription, 160))
                    .col(timestamp_with_time_zone(Articles::CreatedAt))
                    .col(timestamp_with_time_zone(Articles::UpdatedAt))
                    .col(uuid_null(Articles::AuthorId))
                    .col(integer_null(Articles::CategoryId))
                    .col(integer(Articles::ViewCount).default(0).to_owned())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTICLES_AUTHOR_ID)
                    .table(Articles::Table)
                    .col(Articles::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTICLES_CATEGORY_ID)
                    .table(Articles::Table)
                    .col(Articles::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTICLES_AUTHOR_ID)
                    .from_tbl(Articles::Table)
                    .from_col(Articles::AuthorId)
                    .to_tbl(Authors::Table)
                    .to_col(Authors::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTICLES_CATEGORY_ID)
                    .from_tbl(Articles::Table)
                    .from_col(Articles::CategoryId)
                    .to_tbl(Categories::Table)
                    .to_col(Categories::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTICLES_CATEGORY_ID)
                    .table(Articles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTICLES_AUTHOR_ID)
                    .table(Articles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ARTICLES_CATEGORY_ID)
                    .table(Articles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ARTICLES_AUTHOR_ID)
                    .table(Articles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Articles {
    Table,
    Id,
    Title,
    ShortDescription,
    LongDescription,
    Slug,
    PostDate,
    IsFeature,
    IsTrending,
    TagsJson,
    MetaTitle,
    MetaTag,
    MetaDescription,
    OgTitle,
    OgDescription,
    CreatedAt,
    UpdatedAt,
    AuthorId,
    CategoryId,
    ViewCount,
}
