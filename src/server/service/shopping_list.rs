use sea_orm::DatabaseConnection;

use crate::server::{
    data::shopping_list::ShoppingListRepository,
    error::AppError,
    model::shopping_list::{CreateShoppingListParam, PatchShoppingListParam, ShoppingList},
};

pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new shopping list
    pub async fn create(&self, param: CreateShoppingListParam) -> Result<ShoppingList, AppError> {
        let list = ShoppingListRepository::new(self.db).create(param).await?;

        tracing::debug!("Created shopping list {}", list.id);

        Ok(list)
    }

    /// Gets the shopping list with the given id, or all lists when `id` is `0`, with
    /// their products
    pub async fn fetch(&self, id: i32) -> Result<Vec<ShoppingList>, AppError> {
        Ok(ShoppingListRepository::new(self.db).fetch(id).await?)
    }

    /// Overlays the supplied fields onto the stored shopping list and writes it back
    ///
    /// Returns None if the shopping list doesn't exist
    pub async fn update(
        &self,
        id: i32,
        patch: PatchShoppingListParam,
    ) -> Result<Option<ShoppingList>, AppError> {
        let repo = ShoppingListRepository::new(self.db);

        let Some(existing) = repo.get(id).await?.into_iter().next() else {
            return Ok(None);
        };

        let list = repo.update(existing.id, patch.apply(existing)).await?;

        Ok(Some(list))
    }

    /// Soft deletes a shopping list, leaving its product links in place
    ///
    /// Returns false if the shopping list doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ShoppingListRepository::new(self.db);

        if repo.get(id).await?.is_empty() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted shopping list {}", id);

        Ok(true)
    }

    /// Links a product to a shopping list
    pub async fn attach_product(
        &self,
        shopping_list_id: i32,
        product_id: i32,
    ) -> Result<bool, AppError> {
        Ok(ShoppingListRepository::new(self.db)
            .attach_product(shopping_list_id, product_id)
            .await?)
    }

    /// Unlinks a product from a shopping list
    pub async fn detach_product(
        &self,
        shopping_list_id: i32,
        product_id: i32,
    ) -> Result<bool, AppError> {
        Ok(ShoppingListRepository::new(self.db)
            .detach_product(shopping_list_id, product_id)
            .await?)
    }
}
