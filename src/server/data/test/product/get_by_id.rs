use super::*;

/// Tests retrieving a product by ID.
///
/// Expected: Ok(Some(product))
#[tokio::test]
async fn returns_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .name("Mouse")
        .description(None)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let found = repo.get_by_id(product.id).await?;

    assert_eq!(found, Some(product));

    Ok(())
}

/// Tests retrieving a non-existent product.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert!(repo.get_by_id(12345).await?.is_none());

    Ok(())
}
