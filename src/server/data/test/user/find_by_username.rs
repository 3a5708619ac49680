use super::*;

/// Tests the login lookup.
///
/// The entity is returned raw because the auth service verifies the stored
/// credential hash.
///
/// Expected: Ok(Some) carrying the password hash
#[tokio::test]
async fn finds_entity_with_credential_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("ET042")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("ET042").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().password_hash, "stored-hash");

    Ok(())
}

/// Expected: Ok(None) for an unknown username
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_username("GHOST").await?.is_none());

    Ok(())
}
