use super::*;

/// Tests updating a shopping list's name and description.
///
/// Expected: Ok with the new values stored
#[tokio::test]
async fn updates_shopping_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shopping_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_shopping_list(db).await?;
    let other = factory::create_shopping_list(db).await?;

    let repo = ShoppingListRepository::new(db);
    let updated = repo
        .update(
            list.id,
            UpdateShoppingListParam {
                name: "Party".to_string(),
                description: "Saturday".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, list.id);
    assert_eq!(updated.name, "Party");
    assert_eq!(updated.description, "Saturday");

    let untouched = repo.get(other.id).await?;
    assert_eq!(untouched[0].name, other.name);

    Ok(())
}

/// Tests renaming a list onto the name of another list.
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

    let list = factory::create_shopping_list(db).await?;
    let other = factory::create_shopping_list(db).await?;

    let result = ShoppingListRepository::new(db)
        .update(
            list.id,
            UpdateShoppingListParam {
                name: other.name,
                description: list.description,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
