use super::*;

/// Tests the guard with no user in the session.
///
/// Expected: Err(NotAuthenticated)
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests the guard with a logged-in user and no extra requirements.
///
/// Expected: Ok with the session's user
#[tokio::test]
async fn resolves_session_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = UserFactory::new(db).build().await?;
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session).require(&[]).await.unwrap();

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.username, user.username);

    Ok(())
}

/// Tests the admin permission on a student account.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_student() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = UserFactory::new(db).build().await?;
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests student resolution for an identity without a profile.
///
/// Expected: Err(StudentProfileMissing)
#[tokio::test]
async fn require_student_needs_a_profile() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = UserFactory::new(db).build().await?;
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session).require_student().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::StudentProfileMissing(_)))
    ));

    Ok(())
}

/// Tests the full student resolution.
///
/// Expected: Ok with the identity and its profile
#[tokio::test]
async fn require_student_returns_profile() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = UserFactory::new(db).build().await?;
    let profile = StudentFactory::new(db, user.id).build().await?;
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let (resolved, student) = AuthGuard::new(db, session).require_student().await.unwrap();

    assert_eq!(resolved.id, user.id);
    assert_eq!(student.id, profile.id);
    assert_eq!(student.user_id, user.id);

    Ok(())
}
