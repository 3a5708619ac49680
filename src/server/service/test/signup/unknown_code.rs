use super::*;

/// Tests signup with a code the registry never issued.
///
/// Expected: Err(CodeNotFound) and nothing persisted
#[tokio::test]
async fn rejects_code_absent_from_registry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SignupService::new(db)
        .signup(signup_dto("ET999", "et999@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistryErr(RegistryError::CodeNotFound(_)))
    ));

    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
