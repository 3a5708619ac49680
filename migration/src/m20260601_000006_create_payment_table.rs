use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000005_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::ReservationId))
                    .col(decimal_len(Payment::Amount, 10, 2))
                    .col(string(Payment::PaymentType))
                    .col(date(Payment::PaymentDate))
                    .col(string(Payment::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_reservation_id")
                            .from(Payment::Table, Payment::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    ReservationId,
    Amount,
    PaymentType,
    PaymentDate,
    Status,
}
