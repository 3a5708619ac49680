use super::*;

/// Tests a successful student login.
///
/// Expected: Ok with the identity, no credential material exposed
#[tokio::test]
async fn accepts_valid_student_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hash = password::hash("s3cret-pass").unwrap();
    UserFactory::new(db)
        .username("ET001")
        .password_hash(hash)
        .build()
        .await?;

    let user = AuthService::new(db)
        .login(login_dto("ET001", "s3cret-pass"))
        .await
        .unwrap();

    assert_eq!(user.username, "ET001");
    assert!(user.is_student);

    Ok(())
}

/// Tests that unknown users and wrong passwords look identical.
///
/// Expected: Err(InvalidCredentials) in both cases
#[tokio::test]
async fn rejects_bad_credentials_uniformly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hash = password::hash("s3cret-pass").unwrap();
    UserFactory::new(db)
        .username("ET001")
        .password_hash(hash)
        .build()
        .await?;

    let service = AuthService::new(db);

    let wrong_password = service.login(login_dto("ET001", "not-it")).await;
    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    let unknown_user = service.login(login_dto("GHOST", "s3cret-pass")).await;
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests the role gate on the student login endpoint.
///
/// Correct credentials on an admin-only account are still refused.
///
/// Expected: Err(NotAStudent)
#[tokio::test]
async fn rejects_non_student_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hash = password::hash("s3cret-pass").unwrap();
    UserFactory::new(db)
        .username("ADMIN01")
        .password_hash(hash)
        .student(false)
        .admin(true)
        .build()
        .await?;

    let result = AuthService::new(db)
        .login(login_dto("ADMIN01", "s3cret-pass"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAStudent(_)))
    ));

    Ok(())
}
