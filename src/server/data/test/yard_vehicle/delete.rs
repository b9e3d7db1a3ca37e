use super::*;

/// Expected: Ok(true), the record is gone and the vehicle is kept
#[tokio::test]
async fn deletes_record_and_keeps_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, yard_vehicle) = factory::helpers::create_yard_vehicle_with_dependencies(db).await?;

    let repo = YardVehicleRepository::new(db);

    assert!(repo.delete(&yard_vehicle.id).await?);
    assert!(!repo.delete(&yard_vehicle.id).await?);
    assert_eq!(entity::prelude::YardVehicle::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Vehicle::find().count(db).await?, 1);

    Ok(())
}
