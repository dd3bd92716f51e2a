use super::*;

/// Tests updating an order's status.
///
/// Verifies that the status is persisted and that `updated_at` moves forward
/// while the other columns stay untouched.
///
/// Expected: Ok(Some(updated order))
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update_status(order.id, "shipped".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.status, "shipped");
    assert_eq!(updated.customer_name, order.customer_name);
    assert_eq!(updated.created_at, order.created_at);
    assert!(updated.updated_at >= order.updated_at);

    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "shipped");

    Ok(())
}

/// Tests that any non-empty label is stored as given.
///
/// Expected: Ok(Some(order)) with the custom status
#[tokio::test]
async fn accepts_arbitrary_status_labels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::OrderFactory::new(db)
        .status("delivered")
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update_status(order.id, "awaiting-pickup".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.status, "awaiting-pickup");

    Ok(())
}

/// Tests updating a non-existent order.
///
/// Expected: Ok(None) and no rows written
#[tokio::test]
async fn returns_none_for_nonexistent_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo.update_status(999, "shipped".to_string()).await?;

    assert!(result.is_none());
    assert!(entity::prelude::Order::find().all(db).await?.is_empty());

    Ok(())
}
