use super::*;

/// Tests deleting a product.
///
/// Expected: Ok(true) with product deleted
#[tokio::test]
async fn deletes_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);

    assert!(repo.delete(product.id).await?);
    assert!(entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a non-existent product.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert!(!repo.delete(777).await?);

    Ok(())
}

/// Tests that the store refuses to delete a product referenced by an order item.
///
/// Expected: Err(DbErr) with the product and the item left in place
#[tokio::test]
async fn store_rejects_deleting_referenced_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_order, items) = factory::helpers::create_order_with_items(db, 1).await?;
    let product_id = items[0].product_id;

    let repo = ProductRepository::new(db);

    assert!(repo.delete(product_id).await.is_err());
    assert!(entity::prelude::Product::find_by_id(product_id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::OrderItem::find().all(db).await?, items);

    Ok(())
}
