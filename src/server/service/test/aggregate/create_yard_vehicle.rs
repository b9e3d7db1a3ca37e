use super::*;

/// Expected: Ok with the existing vehicle linked and no vehicle or model created
#[tokio::test]
async fn links_existing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;
    let (model, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;

    let yard_vehicle = AggregateCreationCoordinator::new(db)
        .create_yard_vehicle(new_yard_vehicle(
            &yard.id,
            Reference::Existing(vehicle.id.clone()),
        ))
        .await
        .unwrap();

    assert_eq!(yard_vehicle.yard_id, yard.id);
    assert_eq!(yard_vehicle.vehicle.id, vehicle.id);
    assert_eq!(yard_vehicle.vehicle.model.id, model.id);
    assert_eq!(Vehicle::find().count(db).await?, 1);
    assert_eq!(VehicleModel::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating the whole chain of yard vehicle, vehicle and model from one request.
///
/// Expected: Ok with all three rows committed and linked by their generated ids
#[tokio::test]
async fn creates_inline_vehicle_and_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;

    let yard_vehicle = AggregateCreationCoordinator::new(db)
        .create_yard_vehicle(new_yard_vehicle(
            &yard.id,
            Reference::New(new_vehicle(Reference::New(new_model()))),
        ))
        .await
        .unwrap();

    let stored = YardVehicle::find_by_id(&yard_vehicle.id)
        .one(db)
        .await?
        .unwrap();
    let vehicle = Vehicle::find_by_id(&stored.vehicle_id).one(db).await?.unwrap();

    assert_eq!(vehicle.id, yard_vehicle.vehicle.id);
    assert_eq!(vehicle.model_id, yard_vehicle.vehicle.model.id);
    assert_eq!(vehicle.plate, "ABC1D23");

    Ok(())
}

/// Expected: Err(AppError::NotFound) for an unknown yard, nothing written
#[tokio::test]
async fn fails_for_unknown_yard_without_writing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AggregateCreationCoordinator::new(db)
        .create_yard_vehicle(new_yard_vehicle(
            "yrd_missing",
            Reference::New(new_vehicle(Reference::New(new_model()))),
        ))
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Yard not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert_eq!(Vehicle::find().count(db).await?, 0);
    assert_eq!(VehicleModel::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Err(AppError::NotFound) for an unknown vehicle id
#[tokio::test]
async fn fails_for_unknown_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;

    let result = AggregateCreationCoordinator::new(db)
        .create_yard_vehicle(new_yard_vehicle(
            &yard.id,
            Reference::Existing("veh_missing".to_string()),
        ))
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Vehicle veh_missing not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert_eq!(YardVehicle::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failing yard vehicle insert discards the vehicle and model inserted
/// before it in the same transaction.
///
/// The yard vehicle table is missing, so the last insert of the chain fails.
///
/// Expected: Err(AppError::DbErr) with no vehicle or model stored
#[tokio::test]
async fn rolls_back_vehicle_and_model_when_last_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Address)
        .with_table(Yard)
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;

    let result = AggregateCreationCoordinator::new(db)
        .create_yard_vehicle(new_yard_vehicle(
            &yard.id,
            Reference::New(new_vehicle(Reference::New(new_model()))),
        ))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(Vehicle::find().count(db).await?, 0);
    assert_eq!(VehicleModel::find().count(db).await?, 0);
    assert_eq!(Yard::find().count(db).await?, 1);

    Ok(())
}
