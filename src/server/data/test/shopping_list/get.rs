use super::*;

/// Tests reading a shopping list by id without its products.
///
/// Expected: Ok with the list and an empty product vector
#[tokio::test]
async fn gets_list_without_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (list, _products) = factory::create_list_with_products(db, 2).await?;

    let lists = ShoppingListRepository::new(db).get(list.id).await?;

    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, list.name);
    assert!(lists[0].products.is_empty());

    Ok(())
}

/// Tests reading every list with id 0, skipping deleted ones.
///
/// Expected: Ok with only the live lists
#[tokio::test]
async fn gets_all_live_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_shopping_list(db).await?;
    let second = factory::create_shopping_list(db).await?;
    factory::shopping_list::ShoppingListFactory::new(db)
        .deleted()
        .build()
        .await?;

    let lists = ShoppingListRepository::new(db).get(0).await?;

    let ids: Vec<i32> = lists.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
