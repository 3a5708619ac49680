use super::*;

/// Tests the one-way advance to paid.
///
/// The update is conditioned on the pending status, so a second advance
/// finds nothing to do.
///
/// Expected: Ok(true) then Ok(false), status stays paid
#[tokio::test]
async fn advances_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, student, room) = factory::helpers::create_reservation_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, student.id, room.id).build().await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.advance_to_paid_if_pending(reservation.id).await?);
    assert!(!repo.advance_to_paid_if_pending(reservation.id).await?);

    let stored = repo.find_by_id(reservation.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ReservationStatus::Paid);

    Ok(())
}

/// Tests that confirmed reservations are not advanced.
///
/// The ledger only settles reservations still awaiting payment.
///
/// Expected: Ok(false) and the status untouched
#[tokio::test]
async fn leaves_confirmed_reservations_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, student, room) = factory::helpers::create_reservation_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, student.id, room.id)
        .status("VAL")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    assert!(!repo.advance_to_paid_if_pending(reservation.id).await?);

    let stored = repo.find_by_id(reservation.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ReservationStatus::Confirmed);

    Ok(())
}
