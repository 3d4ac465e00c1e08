use super::*;

/// Tests creating a new shopping list.
///
/// Expected: Ok with the list created and no products
#[tokio::test]
async fn creates_shopping_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = ShoppingListRepository::new(db)
        .create(CreateShoppingListParam {
            name: "Groceries".to_string(),
            description: "Weekly shop".to_string(),
        })
        .await?;

    assert!(list.id > 0);
    assert_eq!(list.name, "Groceries");
    assert_eq!(list.description, "Weekly shop");
    assert!(list.products.is_empty());

    Ok(())
}

/// Tests creating a shopping list with a name already in use.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_shopping_list(db).await?;

    let result = ShoppingListRepository::new(db)
        .create(CreateShoppingListParam {
            name: existing.name,
            description: "Another".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::ShoppingList::find().count(db).await?, 1);

    Ok(())
}
