use super::*;

/// Tests creating an address and a yard that references it.
///
/// Expected: Ok with yard carrying the stored address
#[tokio::test]
async fn creates_yard_at_new_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = YardRepository::new(db);
    let address = repo.create_address(address_params()).await?;
    let yard = repo.create("owner-1".to_string(), address.clone()).await?;

    assert!(address.id.starts_with("adr_"));
    assert!(yard.id.starts_with("yrd_"));
    assert_eq!(yard.owner_id, "owner-1");
    assert_eq!(yard.address.id, address.id);
    assert_eq!(yard.address.city, "Sao Paulo");

    let stored = entity::prelude::Yard::find_by_id(&yard.id).one(db).await?.unwrap();
    assert_eq!(stored.address_id, address.id);

    Ok(())
}

/// Tests that an address can only belong to one yard.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn fails_for_address_of_another_yard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = YardRepository::new(db);
    let address = repo.create_address(address_params()).await?;
    repo.create("owner-1".to_string(), address.clone()).await?;

    let result = repo.create("owner-2".to_string(), address).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Yard::find().count(db).await?, 1);

    Ok(())
}
