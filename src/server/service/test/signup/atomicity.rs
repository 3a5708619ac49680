use super::*;

/// Tests that a failed signup applies nothing at all.
///
/// The email collides with an existing account, so the identity insert (or
/// the profile insert after it) fails inside the transaction. No new
/// identity may remain and the registry entry must still be unconsumed:
/// an identity must never exist without its profile, and a consumed flag
/// must never exist without its account.
///
/// Expected: Err, no user for the code, used still false
#[tokio::test]
async fn failed_signup_leaves_no_partial_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MatriculationFactory::new(db).code("A12345").build().await?;

    UserFactory::new(db)
        .username("OTHER")
        .email("taken@example.com")
        .build()
        .await?;

    let result = SignupService::new(db)
        .signup(signup_dto("A12345", "taken@example.com"))
        .await;

    assert!(result.is_err());

    let ghost = entity::prelude::User::find()
        .filter(entity::user::Column::Username.eq("A12345"))
        .one(db)
        .await?;
    assert!(ghost.is_none());

    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    let entry = entity::prelude::Matriculation::find()
        .filter(entity::matriculation::Column::Code.eq("A12345"))
        .one(db)
        .await?
        .unwrap();
    assert!(!entry.used);

    Ok(())
}
