use super::*;

/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, yard) = factory::helpers::create_yard_with_dependencies(db).await?;
    let employee = factory::create_yard_employee(db, &yard.id).await?;

    let repo = YardEmployeeRepository::new(db);

    assert!(repo.delete(&employee.id).await?);
    assert!(!repo.delete(&employee.id).await?);
    assert!(repo.get_by_id(&employee.id).await?.is_none());

    Ok(())
}
