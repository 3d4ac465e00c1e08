use super::*;

/// Tests fetching a list by id together with its products.
///
/// Expected: Ok with every attached product loaded once
#[tokio::test]
async fn fetches_list_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (list, products) = factory::create_list_with_products(db, 2).await?;
    factory::create_list_with_products(db, 1).await?;

    let lists = ShoppingListRepository::new(db).fetch(list.id).await?;

    assert_eq!(lists.len(), 1);
    let ids: Vec<i32> = lists[0].products.iter().map(|p| p.id).collect();
    assert_eq!(ids, products.iter().map(|p| p.id).collect::<Vec<_>>());

    Ok(())
}

/// Tests fetching every list with its own products.
///
/// Expected: Ok with each list holding only its products, empty lists included
#[tokio::test]
async fn fetches_all_lists_with_their_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, first_products) = factory::create_list_with_products(db, 2).await?;
    let (second, second_products) = factory::create_list_with_products(db, 1).await?;
    let empty = factory::create_shopping_list(db).await?;

    let lists = ShoppingListRepository::new(db).fetch(0).await?;

    assert_eq!(lists.len(), 3);
    assert_eq!(lists[0].id, first.id);
    assert_eq!(lists[0].products.len(), first_products.len());
    assert_eq!(lists[1].id, second.id);
    assert_eq!(lists[1].products[0].id, second_products[0].id);
    assert_eq!(lists[2].id, empty.id);
    assert!(lists[2].products.is_empty());

    Ok(())
}

/// Tests fetching a list id that does not exist.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_missing_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lists = ShoppingListRepository::new(db).fetch(7).await?;

    assert!(lists.is_empty());

    Ok(())
}

/// Tests that a deleted product linked to a list is hidden from the fetch.
///
/// The join row outlives the soft delete, but eager loading skips deleted products.
///
/// Expected: Ok with only the live product loaded
#[tokio::test]
async fn skips_deleted_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_shopping_list(db).await?;
    let live = factory::create_product(db).await?;
    let deleted = factory::product::ProductFactory::new(db)
        .deleted()
        .build()
        .await?;
    factory::attach_product(db, list.id, live.id).await?;
    factory::attach_product(db, list.id, deleted.id).await?;

    let lists = ShoppingListRepository::new(db).fetch(list.id).await?;

    assert_eq!(lists[0].products.len(), 1);
    assert_eq!(lists[0].products[0].id, live.id);
    assert_eq!(entity::prelude::ShoppingListProduct::find().count(db).await?, 2);

    Ok(())
}
