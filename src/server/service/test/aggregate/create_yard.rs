use super::*;

/// Tests that a yard and its inline address are committed together.
///
/// Expected: Ok with one yard and one address stored, the yard pointing at the address
#[tokio::test]
async fn commits_yard_and_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let yard = AggregateCreationCoordinator::new(db)
        .create_yard(CreateYardParams {
            owner_id: "owner-1".to_string(),
            address: CreateAddressParams {
                country: "Brazil".to_string(),
                state: "SP".to_string(),
                city: "Sao Paulo".to_string(),
                zip_code: "01310-100".to_string(),
                neighborhood: "Bela Vista".to_string(),
                complement: Some("Block A".to_string()),
            },
        })
        .await
        .unwrap();

    let stored = Yard::find_by_id(&yard.id).one(db).await?.unwrap();

    assert_eq!(stored.address_id, yard.address.id);
    assert_eq!(Yard::find().count(db).await?, 1);
    assert_eq!(Address::find().count(db).await?, 1);
    assert_eq!(yard.address.complement.as_deref(), Some("Block A"));

    Ok(())
}

/// Tests that a failing yard insert also discards the address inserted before it.
///
/// The yard table is missing, so the second insert fails after the address insert
/// succeeded inside the transaction.
///
/// Expected: Err(AppError::DbErr) with no address stored
#[tokio::test]
async fn rolls_back_address_when_yard_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AggregateCreationCoordinator::new(db)
        .create_yard(CreateYardParams {
            owner_id: "owner-1".to_string(),
            address: CreateAddressParams {
                country: "Brazil".to_string(),
                state: "SP".to_string(),
                city: "Sao Paulo".to_string(),
                zip_code: "01310-100".to_string(),
                neighborhood: "Bela Vista".to_string(),
                complement: None,
            },
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(Address::find().count(db).await?, 0);

    Ok(())
}
