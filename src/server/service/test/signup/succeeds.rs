use super::*;

/// Tests a complete successful signup.
///
/// With an unconsumed registry entry for "ET001", registration leaves
/// exactly one identity (username = the code, student role), one profile
/// carrying the code, and the registry entry consumed.
///
/// Expected: Ok, all three records consistent
#[tokio::test]
async fn creates_identity_profile_and_consumes_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MatriculationFactory::new(db).code("ET001").build().await?;

    let user = SignupService::new(db)
        .signup(signup_dto("ET001", "et001@example.com"))
        .await
        .unwrap();

    assert_eq!(user.username, "ET001");
    assert!(user.is_student);
    assert!(!user.is_admin);

    let user_count = entity::prelude::User::find().count(db).await?;
    assert_eq!(user_count, 1);

    let student = entity::prelude::Student::find()
        .filter(entity::student::Column::MatriculationCode.eq("ET001"))
        .one(db)
        .await?
        .expect("profile should exist");
    assert_eq!(student.user_id, user.id);

    let entry = entity::prelude::Matriculation::find()
        .filter(entity::matriculation::Column::Code.eq("ET001"))
        .one(db)
        .await?
        .unwrap();
    assert!(entry.used);

    Ok(())
}
