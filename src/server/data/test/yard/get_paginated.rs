use super::*;

/// Tests that pages hold at most `page_size` yards and report totals.
///
/// Expected: 5 yards in pages of 2 gives 3 pages, the last one with 1 yard
#[tokio::test]
async fn splits_yards_into_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::helpers::create_yard_with_dependencies(db).await?;
    }

    let repo = YardRepository::new(db);
    let first = repo
        .get_paginated(PageRequest {
            page_number: 1,
            page_size: 2,
        })
        .await?;
    let last = repo
        .get_paginated(PageRequest {
            page_number: 3,
            page_size: 2,
        })
        .await?;

    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_records, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.page_number, 3);

    Ok(())
}

/// Expected: empty items while totals are still reported
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_yard_with_dependencies(db).await?;

    let page = YardRepository::new(db)
        .get_paginated(PageRequest {
            page_number: 4,
            page_size: 10,
        })
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total_records, 1);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

/// Expected: no items and zero pages
#[tokio::test]
async fn returns_zero_pages_without_yards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_yard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = YardRepository::new(db)
        .get_paginated(PageRequest::default())
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total_records, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}
