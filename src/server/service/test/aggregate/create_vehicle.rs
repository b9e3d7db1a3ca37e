use super::*;

/// Expected: Ok with the vehicle linked to the existing model and no new model row
#[tokio::test]
async fn links_existing_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_vehicle_model(db).await?;

    let vehicle = AggregateCreationCoordinator::new(db)
        .create_vehicle(new_vehicle(Reference::Existing(model.id.clone())))
        .await
        .unwrap();

    assert_eq!(vehicle.model.id, model.id);
    assert_eq!(vehicle.model.name, model.name);
    assert_eq!(VehicleModel::find().count(db).await?, 1);
    assert_eq!(Vehicle::find().count(db).await?, 1);

    Ok(())
}

/// Expected: Ok with a new model row created alongside the vehicle
#[tokio::test]
async fn creates_inline_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = AggregateCreationCoordinator::new(db)
        .create_vehicle(new_vehicle(Reference::New(new_model())))
        .await
        .unwrap();

    let stored = Vehicle::find_by_id(&vehicle.id).one(db).await?.unwrap();

    assert_eq!(stored.model_id, vehicle.model.id);
    assert_eq!(vehicle.model.name, "Mottu Sport");
    assert_eq!(VehicleModel::find().count(db).await?, 1);

    Ok(())
}

/// Expected: Err(AppError::NotFound) and nothing written
#[tokio::test]
async fn fails_for_unknown_model_without_writing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AggregateCreationCoordinator::new(db)
        .create_vehicle(new_vehicle(Reference::Existing("mdl_missing".to_string())))
        .await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "Vehicle model mdl_missing not found")
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert_eq!(Vehicle::find().count(db).await?, 0);

    Ok(())
}
