use super::*;

/// Expected: only employees of the requested yard
#[tokio::test]
async fn lists_only_employees_of_yard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;
    let (_, other_yard) = factory::helpers::create_yard_with_dependencies(db).await?;
    for _ in 0..3 {
        factory::create_yard_employee(db, &yard.id).await?;
    }
    factory::create_yard_employee(db, &other_yard.id).await?;

    let page = YardEmployeeRepository::new(db)
        .get_by_yard_paginated(
            &yard.id,
            PageRequest {
                page_number: 1,
                page_size: 2,
            },
        )
        .await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_records, 3);
    assert_eq!(page.total_pages, 2);
    assert!(page.items.iter().all(|e| e.yard_id == yard.id));

    Ok(())
}
