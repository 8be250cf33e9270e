use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Galleries::Table)
                    .if_not_exists()
                    .col(pk_auto(Galleries::Id))
                    .col(string_len_null(Galleries::Title, 100))
                    .col(string_len_null(Galleries::Folder, 100))
                    .col(string_len_null(Galleries::Image, 255))
                    .col(string_len_null(Galleries::Alt, 300))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Galleries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Galleries {
    Table,
    Id,
    Title,
    Folder,
    Image,
    Alt,
}
