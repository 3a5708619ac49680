use super::*;

/// Tests the administrative bulk reset.
///
/// Expected: Ok(2) and both entries unconsumed again
#[tokio::test]
async fn resets_used_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Matriculation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = MatriculationFactory::new(db).used(true).build().await?;
    let second = MatriculationFactory::new(db).used(true).build().await?;

    let repo = MatriculationRepository::new(db);
    let reset = repo.mark_unused(&[first.id, second.id]).await?;

    assert_eq!(reset, 2);
    assert!(!repo.find_by_id(first.id).await?.unwrap().used);
    assert!(!repo.find_by_id(second.id).await?.unwrap().used);

    Ok(())
}

/// Tests the empty input short-circuit.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn returns_zero_for_empty_slice() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Matriculation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatriculationRepository::new(db);

    assert_eq!(repo.mark_unused(&[]).await?, 0);

    Ok(())
}
