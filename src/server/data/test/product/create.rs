use super::*;

/// Tests creating a new product.
///
/// Verifies that the repository inserts the product with the supplied fields
/// and assigns it an id.
///
/// Expected: Ok with product created
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo.create(apple()).await?;

    assert!(product.id > 0);
    assert_eq!(product.name, "Apple");
    assert_eq!(product.description, "fruit");
    assert_eq!(product.image, "Zm9v");
    assert_eq!(product.price, 10);
    assert!(product.deleted_at.is_none());

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Apple");

    Ok(())
}

/// Tests creating a product with a name already in use.
///
/// Expected: Err from the unique constraint, nothing inserted
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    repo.create(apple()).await?;
    let result = repo.create(apple()).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Product::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a soft deleted product still holds its name.
///
/// The unique index covers deleted rows as well.
///
/// Expected: Err when reusing the name of a deleted product
#[tokio::test]
async fn fails_on_name_of_deleted_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .name("Apple")
        .deleted()
        .build()
        .await?;

    let result = ProductRepository::new(db).create(apple()).await;

    assert!(result.is_err());

    Ok(())
}
