use super::*;

/// Tests the conditional consumption of a code.
///
/// The first flip wins and persists `used = true`; a second attempt against
/// the same code must lose because the guard condition no longer holds.
///
/// Expected: Ok(true) then Ok(false), flag set exactly once
#[tokio::test]
async fn consumes_code_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Matriculation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MatriculationFactory::new(db).code("ET010").build().await?;

    let repo = MatriculationRepository::new(db);

    assert!(repo.mark_used_if_unused("ET010").await?);
    assert!(!repo.mark_used_if_unused("ET010").await?);

    let entry = repo.find_by_code("ET010").await?.unwrap();
    assert!(entry.used);

    Ok(())
}

/// Tests consumption of an absent code.
///
/// Expected: Ok(false), nothing to flip
#[tokio::test]
async fn returns_false_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Matriculation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatriculationRepository::new(db);

    assert!(!repo.mark_used_if_unused("GHOST").await?);

    Ok(())
}
