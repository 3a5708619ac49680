use super::*;

/// Tests resolving the profile owned by an identity.
///
/// Expected: Ok(Some) for the linked identity, Ok(None) otherwise
#[tokio::test]
async fn finds_profile_of_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let created = StudentFactory::new(db, user.id).build().await?;

    let other = UserFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);

    let found = repo.find_by_user_id(user.id).await.unwrap();
    assert_eq!(found.map(|s| s.id), Some(created.id));

    let missing = repo.find_by_user_id(other.id).await.unwrap();
    assert!(missing.is_none());

    Ok(())
}
