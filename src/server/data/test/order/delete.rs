use super::*;

/// Tests deleting an order.
///
/// Expected: Ok(true) with order deleted
#[tokio::test]
async fn deletes_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(order.id).await?;

    assert!(deleted);
    let check = entity::prelude::Order::find_by_id(order.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting an order removes its items.
///
/// Verifies that items of the deleted order are removed while items of other
/// orders and the referenced products are kept.
///
/// Expected: Ok(true) with order and its items deleted
#[tokio::test]
async fn removes_order_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, items) = factory::helpers::create_order_with_items(db, 2).await?;
    let (_other, other_items) = factory::helpers::create_order_with_items(db, 1).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.delete(order.id).await?);

    let remaining = entity::prelude::OrderItem::find().all(db).await?;
    assert_eq!(remaining, other_items);

    for item in items {
        let product = entity::prelude::Product::find_by_id(item.product_id)
            .one(db)
            .await?;
        assert!(product.is_some());
    }

    Ok(())
}

/// Tests deleting a non-existent order.
///
/// Expected: Ok(false) with existing orders untouched
#[tokio::test]
async fn returns_false_for_nonexistent_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(order.id + 1).await?;

    assert!(!deleted);
    assert!(entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
