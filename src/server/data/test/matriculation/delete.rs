use super::*;

/// Tests deleting an entry by id.
///
/// Expected: Ok(1) and the entry is gone
#[tokio::test]
async fn deletes_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Matriculation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = MatriculationFactory::new(db).build().await?;

    let repo = MatriculationRepository::new(db);
    let deleted = repo.delete(entry.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(entry.id).await?.is_none());

    Ok(())
}

/// Tests deleting an absent entry.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Matriculation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatriculationRepository::new(db);

    assert_eq!(repo.delete(424242).await?, 0);

    Ok(())
}
