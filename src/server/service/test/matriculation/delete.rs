use super::*;

/// Tests the deletion guard on consumed entries.
///
/// Expected: Err(DeleteUsed) and the entry still present
#[tokio::test]
async fn refuses_used_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = MatriculationFactory::new(db).used(true).build().await?;

    let service = MatriculationService::new(db);
    let result = service.delete(entry.id).await;

    assert!(matches!(
        result,
        Err(AppError::RegistryErr(RegistryError::DeleteUsed(_)))
    ));
    assert!(service.get(entry.id).await.is_ok());

    Ok(())
}

/// Tests deleting an unconsumed entry.
///
/// Expected: Ok and the entry gone
#[tokio::test]
async fn deletes_unused_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = MatriculationFactory::new(db).build().await?;

    let service = MatriculationService::new(db);
    service.delete(entry.id).await.unwrap();

    assert!(matches!(
        service.get(entry.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
