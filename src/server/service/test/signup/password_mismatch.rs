use super::*;

/// Tests the confirmation check.
///
/// Expected: Err(PasswordMismatch) and nothing persisted
#[tokio::test]
async fn rejects_mismatched_confirmation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MatriculationFactory::new(db).code("ET001").build().await?;

    let mut dto = signup_dto("ET001", "et001@example.com");
    dto.password_confirm = "different".to_string();

    let result = SignupService::new(db).signup(dto).await;

    assert!(matches!(
        result,
        Err(AppError::SignupErr(SignupError::PasswordMismatch))
    ));

    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
