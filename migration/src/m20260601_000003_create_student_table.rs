use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer_uniq(Student::UserId))
                    .col(string_uniq(Student::MatriculationCode))
                    .col(string(Student::LastName))
                    .col(string(Student::FirstName))
                    .col(string(Student::Major))
                    .col(integer(Student::Level))
                    .col(string_null(Student::Phone))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_user_id")
                            .from(Student::Table, Student::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    UserId,
    MatriculationCode,
    LastName,
    FirstName,
    Major,
    Level,
    Phone,
}
