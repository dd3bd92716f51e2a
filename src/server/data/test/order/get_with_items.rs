use super::*;

/// Tests retrieving an order with its items.
///
/// Verifies that items belonging to other orders are excluded and that items
/// come back in ascending ID order.
///
/// Expected: Ok(Some((order, [item1, item2])))
#[tokio::test]
async fn returns_order_with_its_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, items) = factory::helpers::create_order_with_items(db, 2).await?;
    let (_other_order, _other_items) = factory::helpers::create_order_with_items(db, 1).await?;

    let repo = OrderRepository::new(db);
    let (found, found_items) = repo.get_with_items(order.id).await?.unwrap();

    assert_eq!(found, order);
    assert_eq!(found_items, items);

    Ok(())
}

/// Tests retrieving an order that has no items.
///
/// Expected: Ok(Some((order, [])))
#[tokio::test]
async fn returns_order_without_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;

    let repo = OrderRepository::new(db);
    let (found, items) = repo.get_with_items(order.id).await?.unwrap();

    assert_eq!(found.id, order.id);
    assert!(items.is_empty());

    Ok(())
}

/// Tests retrieving details of a non-existent order.
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

    assert!(repo.get_with_items(404).await?.is_none());

    Ok(())
}
