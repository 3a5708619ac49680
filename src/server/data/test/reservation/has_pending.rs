use super::*;

/// Tests the at-most-one-pending lookup.
///
/// Only a pending reservation counts; confirmed, paid and cancelled ones do
/// not block a new reservation.
///
/// Expected: true with a pending row, false otherwise
#[tokio::test]
async fn counts_only_pending_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, student, room) = factory::helpers::create_reservation_dependencies(db).await?;

    let repo = ReservationRepository::new(db);

    assert!(!repo.has_pending(student.id).await?);

    ReservationFactory::new(db, student.id, room.id)
        .status("PAYE")
        .build()
        .await?;
    assert!(!repo.has_pending(student.id).await?);

    let second_room = RoomFactory::new(db).build().await?;
    ReservationFactory::new(db, student.id, second_room.id)
        .build()
        .await?;
    assert!(repo.has_pending(student.id).await?);

    Ok(())
}
