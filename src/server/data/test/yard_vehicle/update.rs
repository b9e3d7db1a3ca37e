use super::*;

/// Expected: Ok(Some) with status and left_at changed, entered_at kept
#[tokio::test]
async fn updates_status_and_left_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, yard_vehicle) = factory::helpers::create_yard_vehicle_with_dependencies(db).await?;
    let left_at = yard_vehicle.entered_at + Duration::hours(2);

    let updated = YardVehicleRepository::new(db)
        .update(
            &yard_vehicle.id,
            UpdateYardVehicleParams {
                status: Some(YardVehicleStatus::Finished),
                entered_at: None,
                left_at: Some(left_at),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, YardVehicleStatus::Finished);
    assert_eq!(updated.left_at, Some(left_at));
    assert_eq!(updated.entered_at, yard_vehicle.entered_at);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_yard_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = YardVehicleRepository::new(db)
        .update(
            "yvh_missing",
            UpdateYardVehicleParams {
                status: Some(YardVehicleStatus::Cancelled),
                entered_at: None,
                left_at: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
