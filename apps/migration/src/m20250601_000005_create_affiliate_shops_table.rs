use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AffiliateShops::Table)
                    .if_not_exists()
                    .col(pk_auto(AffiliateShops::Id))
                    .col(string_len_null(AffiliateShops::ShopName, 255))
                    .col(string_len_null(AffiliateShops::ShopLogo, 255))
                    .col(string_len_null(AffiliateShops::RegId, 255))
                    .col(timestamp_with_time_zone(AffiliateShops::CreatedAt))
                    .col(timestamp_with_time_zone(AffiliateShops::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AffiliateShops::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AffiliateShops {
    Table,
    Id,
    ShopName,
    ShopLogo,
    RegId,
    CreatedAt,
    UpdatedAt,
}
