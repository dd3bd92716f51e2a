use super::*;

/// Tests creating a product.
///
/// Expected: Ok(product) persisted with the given values
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParams {
            name: "Keyboard".to_string(),
            description: Some("Mechanical".to_string()),
            price: 49.99,
            stock: 12,
        })
        .await?;

    assert!(product.id > 0);
    assert_eq!(product.name, "Keyboard");
    assert_eq!(product.description.as_deref(), Some("Mechanical"));
    assert_eq!(product.price, 49.99);
    assert_eq!(product.stock, 12);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(product));

    Ok(())
}
