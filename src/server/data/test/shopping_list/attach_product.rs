use super::*;

/// Tests linking a product to a list.
///
/// Expected: Ok(true) with the product visible in the fetched list
#[tokio::test]
async fn attaches_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_shopping_list(db).await?;
    let product = factory::create_product(db).await?;

    let repo = ShoppingListRepository::new(db);
    assert!(repo.attach_product(list.id, product.id).await?);

    let lists = repo.fetch(list.id).await?;
    assert_eq!(lists[0].products.len(), 1);
    assert_eq!(lists[0].products[0].id, product.id);

    Ok(())
}

/// Tests linking the same pair twice.
///
/// Expected: Ok with a single join row
#[tokio::test]
async fn does_not_duplicate_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_shopping_list(db).await?;
    let product = factory::create_product(db).await?;

    let repo = ShoppingListRepository::new(db);
    repo.attach_product(list.id, product.id).await?;
    repo.attach_product(list.id, product.id).await?;

    assert_eq!(entity::prelude::ShoppingListProduct::find().count(db).await?, 1);
    assert_eq!(repo.fetch(list.id).await?[0].products.len(), 1);

    Ok(())
}

/// Tests linking a pair whose join row was stored by another writer.
///
/// Expected: Ok(true) without a primary key error and a single join row
#[tokio::test]
async fn absorbs_conflict_with_existing_join_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_shopping_list(db).await?;
    let product = factory::create_product(db).await?;
    factory::attach_product(db, list.id, product.id).await?;

    let linked = ShoppingListRepository::new(db)
        .attach_product(list.id, product.id)
        .await?;

    assert!(linked);
    assert_eq!(entity::prelude::ShoppingListProduct::find().count(db).await?, 1);

    Ok(())
}

/// Tests linking the same pair from two tasks at once.
///
/// Expected: both Ok with a single join row
#[tokio::test]
async fn concurrent_links_of_same_pair_both_succeed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_shopping_list(db).await?;
    let product = factory::create_product(db).await?;

    let first = ShoppingListRepository::new(db);
    let second = ShoppingListRepository::new(db);
    let (a, b) = tokio::join!(
        first.attach_product(list.id, product.id),
        second.attach_product(list.id, product.id)
    );

    assert!(a?);
    assert!(b?);
    assert_eq!(entity::prelude::ShoppingListProduct::find().count(db).await?, 1);

    Ok(())
}

/// Tests linking a product id without a row.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_shopping_list(db).await?;

    let result = ShoppingListRepository::new(db)
        .attach_product(list.id, 999)
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::ShoppingListProduct::find().count(db).await?, 0);

    Ok(())
}
