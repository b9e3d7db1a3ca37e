use super::*;

/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_employee_in_yard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;

    let employee = YardEmployeeRepository::new(db)
        .create(CreateYardEmployeeParams {
            yard_id: yard.id.clone(),
            name: "Maria".to_string(),
            image_url: String::new(),
            role: EmployeeRole::Admin,
            user_id: "usr_maria".to_string(),
        })
        .await?;

    assert!(employee.id.starts_with("emp_"));
    assert_eq!(employee.yard_id, yard.id);
    assert_eq!(employee.name, "Maria");
    assert_eq!(employee.role, EmployeeRole::Admin);

    let stored = YardEmployeeRepository::new(db)
        .get_by_id(&employee.id)
        .await?
        .unwrap();
    assert_eq!(stored, employee);

    Ok(())
}

/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_unknown_yard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = YardEmployeeRepository::new(db)
        .create(CreateYardEmployeeParams {
            yard_id: "yrd_missing".to_string(),
            name: "Maria".to_string(),
            image_url: String::new(),
            role: EmployeeRole::Member,
            user_id: "usr_maria".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
