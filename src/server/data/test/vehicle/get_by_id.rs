use super::*;

/// Expected: Ok(Some) with the vehicle's model
#[tokio::test]
async fn returns_vehicle_with_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (model, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;

    let found = VehicleRepository::new(db)
        .get_by_id(&vehicle.id)
        .await?
        .unwrap();

    assert_eq!(found.plate, vehicle.plate);
    assert_eq!(found.model.id, model.id);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(VehicleRepository::new(db)
        .get_by_id("veh_missing")
        .await?
        .is_none());
    assert!(VehicleModelRepository::new(db)
        .get_by_id("mdl_missing")
        .await?
        .is_none());

    Ok(())
}
