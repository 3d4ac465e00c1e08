use super::*;

/// Tests reading a product by id after creating it.
///
/// Expected: Ok with a single product matching the created fields
#[tokio::test]
async fn gets_product_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let created = repo.create(apple()).await?;
    factory::create_product(db).await?;

    let products = repo.get(created.id).await?;

    assert_eq!(products, vec![created]);

    Ok(())
}

/// Tests reading every product with id 0.
///
/// Expected: Ok with all live products ordered by id
#[tokio::test]
async fn gets_all_products_for_zero_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;

    let products = ProductRepository::new(db).get(0).await?;

    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests reading a product id that does not exist.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let products = ProductRepository::new(db).get(42).await?;

    assert!(products.is_empty());

    Ok(())
}

/// Tests that soft deleted products are excluded from both reads.
///
/// Expected: Ok with the deleted product absent
#[tokio::test]
async fn excludes_deleted_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_product(db).await?;
    let deleted = factory::product::ProductFactory::new(db)
        .deleted()
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(repo.get(deleted.id).await?.is_empty());
    let all = repo.get(0).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, live.id);

    Ok(())
}
