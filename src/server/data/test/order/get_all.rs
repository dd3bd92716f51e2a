use super::*;

/// Tests retrieving orders from an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let orders = repo.get_all().await?;

    assert!(orders.is_empty());

    Ok(())
}

/// Tests retrieving all orders.
///
/// Verifies that every order is returned in ascending ID order.
///
/// Expected: Ok(vec of 3 orders)
#[tokio::test]
async fn returns_all_orders_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_order(db).await?;
    let second = factory::create_order(db).await?;
    let third = factory::create_order(db).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_all().await?;

    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
