use super::*;

/// Expected: Ok with the record linked to the yard and vehicle
#[tokio::test]
async fn creates_yard_vehicle_for_existing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;
    let (_, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let vehicle = VehicleRepository::new(db)
        .get_by_id(&vehicle.id)
        .await?
        .unwrap();
    let entered_at = Utc::now();

    let yard_vehicle = YardVehicleRepository::new(db)
        .create(
            NewYardVehicle {
                yard_id: yard.id.clone(),
                status: YardVehicleStatus::Scheduled,
                entered_at,
                left_at: None,
            },
            vehicle.clone(),
        )
        .await?;

    assert!(yard_vehicle.id.starts_with("yvh_"));
    assert_eq!(yard_vehicle.yard_id, yard.id);
    assert_eq!(yard_vehicle.status, YardVehicleStatus::Scheduled);
    assert_eq!(yard_vehicle.vehicle, vehicle);

    let stored = YardVehicleRepository::new(db)
        .get_by_id(&yard_vehicle.id)
        .await?
        .unwrap();
    assert_eq!(stored.vehicle.id, vehicle.id);
    assert_eq!(stored.vehicle.model, vehicle.model);

    Ok(())
}
