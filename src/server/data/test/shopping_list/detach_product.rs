use super::*;

/// Tests unlinking a product from a list.
///
/// Expected: Ok(true) with only that association removed
#[tokio::test]
async fn detaches_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (list, products) = factory::create_list_with_products(db, 2).await?;

    let repo = ShoppingListRepository::new(db);
    assert!(repo.detach_product(list.id, products[0].id).await?);

    let lists = repo.fetch(list.id).await?;
    assert_eq!(lists[0].products.len(), 1);
    assert_eq!(lists[0].products[0].id, products[1].id);

    Ok(())
}

/// Tests unlinking a pair that was never linked.
///
/// Expected: Ok(true) with existing associations untouched
#[tokio::test]
async fn succeeds_for_unlinked_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (list, _products) = factory::create_list_with_products(db, 1).await?;
    let loose = factory::create_product(db).await?;

    let repo = ShoppingListRepository::new(db);
    assert!(repo.detach_product(list.id, loose.id).await?);

    assert_eq!(entity::prelude::ShoppingListProduct::find().count(db).await?, 1);

    Ok(())
}
