use super::*;

/// Expected: Ok(Some) with only the provided fields changed
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;
    let employee = factory::create_yard_employee(db, &yard.id).await?;

    let updated = YardEmployeeRepository::new(db)
        .update(
            &employee.id,
            UpdateYardEmployeeParams {
                name: Some("Joao".to_string()),
                image_url: None,
                role: Some(EmployeeRole::Admin),
                user_id: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Joao");
    assert_eq!(updated.role, EmployeeRole::Admin);
    assert_eq!(updated.image_url, employee.image_url);
    assert_eq!(updated.user_id, employee.user_id);

    Ok(())
}

/// Expected: Ok(Some) equal to the stored employee
#[tokio::test]
async fn returns_employee_when_nothing_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;
    let employee = factory::create_yard_employee(db, &yard.id).await?;

    let updated = YardEmployeeRepository::new(db)
        .update(
            &employee.id,
            UpdateYardEmployeeParams {
                name: None,
                image_url: None,
                role: None,
                user_id: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, employee.name);
    assert_eq!(updated.id, employee.id);

    Ok(())
}
