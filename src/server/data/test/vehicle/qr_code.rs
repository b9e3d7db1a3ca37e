use super::*;

/// Expected: Ok(Some) with the vehicle the code is attached to
#[tokio::test]
async fn finds_qr_code_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (yard, vehicle, _) = factory::helpers::create_yard_vehicle_with_dependencies(db).await?;
    let qr_code = factory::create_qr_code(db, &yard.id, Some(vehicle.id.clone())).await?;

    let found = QrCodeRepository::new(db)
        .get_by_id(&qr_code.id)
        .await?
        .unwrap();

    assert_eq!(found.vehicle_id, Some(vehicle.id));
    assert!(QrCodeRepository::new(db)
        .get_by_id("qr_missing")
        .await?
        .is_none());

    Ok(())
}
