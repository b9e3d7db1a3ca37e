use super::*;

/// Tests creating a model and a vehicle of that model.
///
/// Expected: Ok with the vehicle carrying its model
#[tokio::test]
async fn creates_vehicle_of_new_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = VehicleModelRepository::new(db)
        .create(CreateVehicleModelParams {
            name: "Mottu Sport".to_string(),
            year: 2023,
        })
        .await?;
    let vehicle = VehicleRepository::new(db)
        .create("ABC1D23".to_string(), "usr_1".to_string(), model.clone())
        .await?;

    assert!(model.id.starts_with("mdl_"));
    assert!(vehicle.id.starts_with("veh_"));
    assert_eq!(vehicle.plate, "ABC1D23");
    assert_eq!(vehicle.user_id, "usr_1");
    assert_eq!(vehicle.model.id, model.id);
    assert_eq!(vehicle.model.name, "Mottu Sport");
    assert_eq!(vehicle.model.year, 2023);

    Ok(())
}

/// Tests that a vehicle cannot point at a model row that was never stored.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_unsaved_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unsaved = entity::vehicle_model::Model {
        id: "mdl_missing".to_string(),
        name: "Ghost".to_string(),
        year: 2020,
    };

    let result = VehicleRepository::new(db)
        .create("ABC1D23".to_string(), "usr_1".to_string(), unsaved)
        .await;

    assert!(result.is_err());

    Ok(())
}
