//! Shopping list data repository for database operations
//!
//! Provides the `ShoppingListRepository` for managing shopping lists and the
//! association of products with them through the `shopping_list_products` join table.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TryInsertResult,
};
use std::collections::HashMap;

use crate::server::model::{
    product::Product,
    shopping_list::{CreateShoppingListParam, ShoppingList, UpdateShoppingListParam},
};

/// Repository providing database operations for shopping lists.
pub struct ShoppingListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListRepository<'a> {
    /// Creates a new ShoppingListRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new shopping list without products
    ///
    /// # Returns
    /// - `Ok(ShoppingList)` - The created shopping list with its assigned id
    /// - `Err(DbErr)` - Database error during insert, including a duplicate name
    pub async fn create(&self, param: CreateShoppingListParam) -> Result<ShoppingList, DbErr> {
        let now = Utc::now();

        let list = entity::shopping_list::ActiveModel {
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ShoppingList::from_entity(list))
    }

    /// Gets the shopping list with the given id, or every list when `id` is `0`
    ///
    /// Products are not loaded, see `fetch` for the eager loading variant.
    ///
    /// # Returns
    /// - `Ok(Vec<ShoppingList>)` - Matching live lists ordered by id
    /// - `Err(DbErr)` - Database error during select
    pub async fn get(&self, id: i32) -> Result<Vec<ShoppingList>, DbErr> {
        let lists = self.find_lists(id).await?;

        Ok(lists.into_iter().map(ShoppingList::from_entity).collect())
    }

    /// Gets the shopping list with the given id, or every list when `id` is `0`, with
    /// each list's products
    ///
    /// Products are loaded through the join table in two queries for the whole result
    /// rather than one per list. Soft deleted products are skipped even when their
    /// join row still exists.
    ///
    /// # Returns
    /// - `Ok(Vec<ShoppingList>)` - Matching live lists with their live products
    /// - `Err(DbErr)` - Database error during select
    pub async fn fetch(&self, id: i32) -> Result<Vec<ShoppingList>, DbErr> {
        let lists = self.find_lists(id).await?;
        if lists.is_empty() {
            return Ok(Vec::new());
        }

        let list_ids: Vec<i32> = lists.iter().map(|l| l.id).collect();
        let links = entity::prelude::ShoppingListProduct::find()
            .filter(entity::shopping_list_product::Column::ShoppingListId.is_in(list_ids))
            .all(self.db)
            .await?;

        let product_ids: Vec<i32> = links.iter().map(|l| l.product_id).collect();
        let products_map: HashMap<i32, entity::product::Model> = if !product_ids.is_empty() {
            entity::prelude::Product::find()
                .filter(entity::product::Column::Id.is_in(product_ids))
                .filter(entity::product::Column::DeletedAt.is_null())
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        } else {
            HashMap::new()
        };

        let mut products_by_list: HashMap<i32, Vec<Product>> = HashMap::new();
        for link in links {
            if let Some(product) = products_map.get(&link.product_id) {
                products_by_list
                    .entry(link.shopping_list_id)
                    .or_default()
                    .push(Product::from_entity(product.clone()));
            }
        }

        Ok(lists
            .into_iter()
            .map(|list| {
                let mut products = products_by_list.remove(&list.id).unwrap_or_default();
                products.sort_by_key(|p| p.id);
                ShoppingList::from_entity_with_products(list, products)
            })
            .collect())
    }

    /// Overwrites the fields of the shopping list with the given id
    ///
    /// # Returns
    /// - `Ok(ShoppingList)` - The list as written, without products
    /// - `Err(DbErr::RecordNotFound)` - No live list has this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateShoppingListParam,
    ) -> Result<ShoppingList, DbErr> {
        let list = entity::prelude::ShoppingList::find_by_id(id)
            .filter(entity::shopping_list::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Shopping list with id {} not found",
                id
            )))?;

        let mut active_model: entity::shopping_list::ActiveModel = list.into();
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);

        let list = active_model.update(self.db).await?;

        Ok(ShoppingList::from_entity(list))
    }

    /// Soft deletes the shopping list with the given id
    ///
    /// Join rows of the list are left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - Always, whether or not a row was affected
    /// - `Err(DbErr)` - Database error during update
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ShoppingList::update_many()
            .col_expr(
                entity::shopping_list::Column::DeletedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::shopping_list::Column::Id.eq(id))
            .filter(entity::shopping_list::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Links a product to a shopping list
    ///
    /// Neither id is checked by the application; the join table's foreign keys reject
    /// ids without a row. Linking an already linked pair is absorbed by the insert's
    /// `ON CONFLICT DO NOTHING`, so concurrent links of one pair cannot fail.
    ///
    /// # Returns
    /// - `Ok(true)` - The pair is linked
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn attach_product(
        &self,
        shopping_list_id: i32,
        product_id: i32,
    ) -> Result<bool, DbErr> {
        let link = entity::shopping_list_product::ActiveModel {
            shopping_list_id: ActiveValue::Set(shopping_list_id),
            product_id: ActiveValue::Set(product_id),
        };

        let result = entity::prelude::ShoppingListProduct::insert(link)
            .on_conflict(
                OnConflict::columns([
                    entity::shopping_list_product::Column::ShoppingListId,
                    entity::shopping_list_product::Column::ProductId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        if let TryInsertResult::Conflicted = result {
            tracing::debug!(
                "Product {} already on shopping list {}",
                product_id,
                shopping_list_id
            );
        }

        Ok(true)
    }

    /// Unlinks a product from a shopping list
    ///
    /// # Returns
    /// - `Ok(true)` - The pair is no longer linked, including when it never was
    /// - `Err(DbErr)` - Database error during delete
    pub async fn detach_product(
        &self,
        shopping_list_id: i32,
        product_id: i32,
    ) -> Result<bool, DbErr> {
        entity::prelude::ShoppingListProduct::delete_many()
            .filter(entity::shopping_list_product::Column::ShoppingListId.eq(shopping_list_id))
            .filter(entity::shopping_list_product::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    async fn find_lists(&self, id: i32) -> Result<Vec<entity::shopping_list::Model>, DbErr> {
        let mut query = entity::prelude::ShoppingList::find()
            .filter(entity::shopping_list::Column::DeletedAt.is_null())
            .order_by_asc(entity::shopping_list::Column::Id);

        if id != 0 {
            query = query.filter(entity::shopping_list::Column::Id.eq(id));
        }

        query.all(self.db).await
    }
}
