use super::*;

/// Tests acceptance at exactly the threshold.
///
/// The payment is recorded with its forced defaults and the reservation
/// advances to paid.
///
/// Expected: Ok; date = move-in, status paid; reservation settled
#[tokio::test]
async fn accepts_amount_at_threshold_and_settles_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, student, room) = factory::helpers::create_reservation_dependencies(db).await?;
    let move_in = NaiveDate::from_ymd_opt(2027, 2, 1).unwrap();
    let reservation = ReservationFactory::new(db, student.id, room.id)
        .move_in_date(move_in)
        .build()
        .await?;
    let student = Student::from_entity(student).unwrap();

    let caller_supplied_date = NaiveDate::from_ymd_opt(2026, 12, 24).unwrap();
    let mut dto = payment_dto(reservation.id, minimum());
    dto.payment_date = Some(caller_supplied_date);
    dto.status = Some(PaymentStatus::Partial);

    let payment = PaymentService::new(db, minimum())
        .create(&student, dto)
        .await
        .unwrap();

    // The supplied date and status are overridden, not defaulted.
    assert_eq!(payment.payment_date, move_in);
    assert_eq!(payment.status, PaymentStatus::Paid);
    assert_eq!(payment.amount, minimum());

    let settled = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(settled.status, ReservationStatus::Paid);

    Ok(())
}

/// Tests rejection one unit below the threshold.
///
/// Expected: Err(InsufficientAmount), reservation untouched
#[tokio::test]
async fn rejects_amount_below_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, student, room) = factory::helpers::create_reservation_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, student.id, room.id).build().await?;
    let student = Student::from_entity(student).unwrap();

    let result = PaymentService::new(db, minimum())
        .create(&student, payment_dto(reservation.id, minimum() - Decimal::ONE))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::InsufficientAmount { .. }))
    ));

    let untouched = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.status, ReservationStatus::Pending);

    Ok(())
}

/// Tests the ownership and status requirements of the target reservation.
///
/// Another student's reservation and the caller's own already-paid one both
/// fail the owned-pending lookup.
///
/// Expected: Err(ReservationNotFound) in both cases
#[tokio::test]
async fn rejects_unowned_or_nonpending_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, owner, room) = factory::helpers::create_reservation_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, owner.id, room.id).build().await?;

    let (_other_user, other, _other_room) =
        factory::helpers::create_reservation_dependencies(db).await?;
    let other = Student::from_entity(other).unwrap();

    let service = PaymentService::new(db, minimum());

    let unowned = service
        .create(&other, payment_dto(reservation.id, minimum()))
        .await;
    assert!(matches!(
        unowned,
        Err(AppError::PaymentErr(PaymentError::ReservationNotFound(_, _)))
    ));

    let owner = Student::from_entity(owner).unwrap();
    service
        .create(&owner, payment_dto(reservation.id, minimum()))
        .await
        .unwrap();

    // Settled once; a second payment finds no pending reservation anymore.
    let second = service
        .create(&owner, payment_dto(reservation.id, minimum()))
        .await;
    assert!(matches!(
        second,
        Err(AppError::PaymentErr(PaymentError::ReservationNotFound(_, _)))
    ));

    Ok(())
}
