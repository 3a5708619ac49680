use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicI32, Ordering};

use crate::factory::{room::RoomFactory, student::StudentFactory, user::UserFactory};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-unique counter value for generating distinct default
/// field values across factories.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates the dependency chain a reservation needs: an identity, its
/// student profile and an available room.
pub async fn create_reservation_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::student::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let user = UserFactory::new(db).build().await?;
    let student = StudentFactory::new(db, user.id).build().await?;
    let room = RoomFactory::new(db).build().await?;

    Ok((user, student, room))
}
