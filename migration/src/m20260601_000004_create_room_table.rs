use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string(Room::Building))
                    .col(string(Room::Floor))
                    .col(text(Room::Description))
                    .col(decimal_len(Room::Price, 10, 2))
                    .col(string(Room::Status).default("DISPO"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    Building,
    Floor,
    Description,
    Price,
    Status,
}
