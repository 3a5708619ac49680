use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000003_create_student_table::Student, m20260601_000004_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::StudentId))
                    .col(integer(Reservation::RoomId))
                    .col(integer(Reservation::TargetLevel))
                    .col(date(Reservation::MoveInDate))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Reservation::Status).default("ATT"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_student_id")
                            .from(Reservation::Table, Reservation::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    StudentId,
    RoomId,
    TargetLevel,
    MoveInDate,
    CreatedAt,
    Status,
}
