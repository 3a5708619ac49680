use super::*;

/// Tests creating a new identity.
///
/// Expected: Ok with role flags and contact fields persisted
#[tokio::test]
async fn creates_student_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "ET001".to_string(),
            email: "et001@example.com".to_string(),
            password_hash: "phc-string".to_string(),
            is_admin: false,
            is_student: true,
        })
        .await?;

    assert_eq!(user.username, "ET001");
    assert_eq!(user.email, "et001@example.com");
    assert!(user.is_student);
    assert!(!user.is_admin);

    Ok(())
}

/// Tests the uniqueness constraints on username and email.
///
/// Expected: Err(DbErr) when either collides
#[tokio::test]
async fn rejects_duplicate_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("ET001")
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let same_username = repo
        .create(CreateUserParams {
            username: "ET001".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "phc-string".to_string(),
            is_admin: false,
            is_student: true,
        })
        .await;
    assert!(same_username.is_err());

    let same_email = repo
        .create(CreateUserParams {
            username: "ET002".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "phc-string".to_string(),
            is_admin: false,
            is_student: true,
        })
        .await;
    assert!(same_email.is_err());

    Ok(())
}
