use super::*;

/// Tests retrieving an order by ID.
///
/// Expected: Ok(Some(order))
#[tokio::test]
async fn returns_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::OrderFactory::new(db)
        .customer_name("Alice")
        .status("shipped")
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let result = repo.get_by_id(order.id).await?;

    let found = result.unwrap();
    assert_eq!(found.id, order.id);
    assert_eq!(found.customer_name, "Alice");
    assert_eq!(found.status, "shipped");

    Ok(())
}

/// Tests retrieving a non-existent order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo.get_by_id(999999).await?;

    assert!(result.is_none());

    Ok(())
}
