use super::*;

/// Expected: Ok(Some) with the yard's address attached
#[tokio::test]
async fn returns_yard_with_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (address, yard) = factory::helpers::create_yard_with_dependencies(db).await?;

    let result = YardRepository::new(db).get_by_id(&yard.id).await?;

    let found = result.unwrap();
    assert_eq!(found.id, yard.id);
    assert_eq!(found.owner_id, yard.owner_id);
    assert_eq!(found.address.id, address.id);
    assert_eq!(found.address.complement, address.complement);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = YardRepository::new(db);

    assert!(repo.get_by_id("yrd_missing").await?.is_none());
    assert!(!repo.exists("yrd_missing").await?);

    Ok(())
}
