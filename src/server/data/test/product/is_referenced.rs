use super::*;

/// Tests reference detection for products used by order items.
///
/// Expected: true for the ordered product, false for an unused one
#[tokio::test]
async fn detects_products_used_by_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_order, items) = factory::helpers::create_order_with_items(db, 1).await?;
    let unused = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);

    assert!(repo.is_referenced(items[0].product_id).await?);
    assert!(!repo.is_referenced(unused.id).await?);

    Ok(())
}
