use super::*;

/// Tests that deleting a yard also removes its address and everything in the yard.
///
/// Expected: Ok(true), no yard, address, employee, yard vehicle or QR code left,
/// the vehicle itself kept
#[tokio::test]
async fn deletes_yard_with_address_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (yard, vehicle, _) = factory::helpers::create_yard_vehicle_with_dependencies(db).await?;
    factory::create_yard_employee(db, &yard.id).await?;
    factory::create_qr_code(db, &yard.id, Some(vehicle.id.clone())).await?;

    let deleted = YardRepository::new(db).delete(&yard.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Yard::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Address::find().count(db).await?, 0);
    assert_eq!(entity::prelude::YardEmployee::find().count(db).await?, 0);
    assert_eq!(entity::prelude::YardVehicle::find().count(db).await?, 0);
    assert_eq!(entity::prelude::QrCode::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Vehicle::find().count(db).await?, 1);

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_yard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = YardRepository::new(db).delete("yrd_missing").await?;

    assert!(!deleted);

    Ok(())
}
