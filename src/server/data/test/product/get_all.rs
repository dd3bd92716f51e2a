use super::*;

/// Tests retrieving all products in ID order.
///
/// Expected: Ok(vec of products)
#[tokio::test]
async fn returns_all_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;

    let products = repo.get_all().await?;
    assert_eq!(products, vec![first, second]);

    Ok(())
}
