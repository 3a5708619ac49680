pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_user_table;
mod m20260601_000002_create_matriculation_table;
mod m20260601_000003_create_student_table;
mod m20260601_000004_create_room_table;
mod m20260601_000005_create_reservation_table;
mod m20260601_000006_create_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_user_table::Migration),
            Box::new(m20260601_000002_create_matriculation_table::Migration),
            Box::new(m20260601_000003_create_student_table::Migration),
            Box::new(m20260601_000004_create_room_table::Migration),
            Box::new(m20260601_000005_create_reservation_table::Migration),
            Box::new(m20260601_000006_create_payment_table::Migration),
        ]
    }
}
