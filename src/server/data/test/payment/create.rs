use super::*;

/// Tests the first-save defaulting rule.
///
/// Whatever the caller intended, the stored record carries the reservation's
/// move-in date and a paid status; the parameter type has no fields to say
/// otherwise.
///
/// Expected: Ok with date forced to move-in and status forced to paid
#[tokio::test]
async fn forces_date_and_status_on_first_save() -> Result<(), DbErr> {
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

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(
            CreatePaymentParams {
                reservation_id: reservation.id,
                amount: Decimal::from(150_000),
                payment_type: PaymentType::Monthly,
            },
            reservation.move_in_date,
        )
        .await
        .unwrap();

    assert_eq!(payment.payment_date, move_in);
    assert_eq!(payment.status, PaymentStatus::Paid);
    assert_eq!(payment.amount, Decimal::from(150_000));
    assert_eq!(payment.payment_type, PaymentType::Monthly);

    Ok(())
}

/// Tests the foreign key on the reservation reference.
///
/// Expected: Err(DbErr) for a nonexistent reservation
#[tokio::test]
async fn fails_for_nonexistent_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let result = repo
        .create(
            CreatePaymentParams {
                reservation_id: 424242,
                amount: Decimal::from(150_000),
                payment_type: PaymentType::Annual,
            },
            NaiveDate::from_ymd_opt(2027, 2, 1).unwrap(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
