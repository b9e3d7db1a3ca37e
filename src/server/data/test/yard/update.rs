use super::*;

/// Expected: Ok(Some) with the new owner
#[tokio::test]
async fn updates_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (address, yard) = factory::helpers::create_yard_with_dependencies(db).await?;

    let updated = YardRepository::new(db)
        .update(
            &yard.id,
            UpdateYardParams {
                owner_id: Some("new-owner".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.owner_id, "new-owner");
    assert_eq!(updated.address.id, address.id);

    Ok(())
}

/// Expected: Ok(Some) with the yard unchanged
#[tokio::test]
async fn keeps_yard_when_nothing_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;

    let updated = YardRepository::new(db)
        .update(&yard.id, UpdateYardParams { owner_id: None })
        .await?
        .unwrap();

    assert_eq!(updated.owner_id, yard.owner_id);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_yard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = YardRepository::new(db)
        .update(
            "yrd_missing",
            UpdateYardParams {
                owner_id: Some("new-owner".to_string()),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
