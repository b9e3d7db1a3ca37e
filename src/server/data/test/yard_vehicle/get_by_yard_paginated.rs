use super::*;

/// Tests that only the vehicles of the requested yard are listed.
///
/// Expected: Ok with 2 records for the first yard, none of the other yard's
#[tokio::test]
async fn lists_only_vehicles_of_yard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (yard, vehicle, _) = factory::helpers::create_yard_vehicle_with_dependencies(db).await?;
    factory::create_yard_vehicle(db, &yard.id, &vehicle.id).await?;
    factory::helpers::create_yard_vehicle_with_dependencies(db).await?;

    let page = YardVehicleRepository::new(db)
        .get_by_yard_paginated(&yard.id, PageRequest::default())
        .await?;

    assert_eq!(page.total_records, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().all(|yv| yv.yard_id == yard.id));
    assert!(page.items.iter().all(|yv| yv.vehicle.id == vehicle.id));

    Ok(())
}

/// Expected: second page of size 1 holds exactly one record
#[tokio::test]
async fn pages_yard_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (yard, vehicle, _) = factory::helpers::create_yard_vehicle_with_dependencies(db).await?;
    factory::create_yard_vehicle(db, &yard.id, &vehicle.id).await?;

    let page = YardVehicleRepository::new(db)
        .get_by_yard_paginated(
            &yard.id,
            PageRequest {
                page_number: 2,
                page_size: 1,
            },
        )
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_pages, 2);

    Ok(())
}
