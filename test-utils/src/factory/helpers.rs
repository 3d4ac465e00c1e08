//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts a join row linking a product to a shopping list.
///
/// # Arguments
/// - `db` - Database connection
/// - `shopping_list_id` - ID of the shopping list
/// - `product_id` - ID of the product
///
/// # Returns
/// - `Ok(entity::shopping_list_product::Model)` - Created join row
/// - `Err(DbErr)` - Database error during insert
pub async fn attach_product(
    db: &DatabaseConnection,
    shopping_list_id: i32,
    product_id: i32,
) -> Result<entity::shopping_list_product::Model, DbErr> {
    entity::shopping_list_product::ActiveModel {
        shopping_list_id: ActiveValue::Set(shopping_list_id),
        product_id: ActiveValue::Set(product_id),
    }
    .insert(db)
    .await
}

/// Creates a shopping list holding `count` freshly created products.
///
/// # Returns
/// - `Ok((list, products))` - The list and the products attached to it
/// - `Err(DbErr)` - Database error during creation
pub async fn create_list_with_products(
    db: &DatabaseConnection,
    count: usize,
) -> Result<
    (
        entity::shopping_list::Model,
        Vec<entity::product::Model>,
    ),
    DbErr,
> {
    let list = crate::factory::shopping_list::create_shopping_list(db).await?;

    let mut products = Vec::with_capacity(count);
    for _ in 0..count {
        let product = crate::factory::product::create_product(db).await?;
        attach_product(db, list.id, product.id).await?;
        products.push(product);
    }

    Ok((list, products))
}
