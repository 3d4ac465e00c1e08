//! Shopping list factory for creating test shopping list entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shopping lists with customizable fields.
pub struct ShoppingListFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> ShoppingListFactory<'a> {
    /// Creates a new ShoppingListFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Shopping List {id}"` where id is auto-incremented
    /// - description: `"Description {id}"`
    /// - deleted_at: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Shopping List {}", id),
            description: format!("Description {}", id),
            deleted_at: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the shopping list as soft deleted at the current time.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the shopping list entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shopping_list::Model)` - Created shopping list entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shopping_list::Model, DbErr> {
        let now = Utc::now();

        entity::shopping_list::ActiveModel {
            id: ActiveValue::NotSet,
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted_at),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shopping list with default values.
pub async fn create_shopping_list(
    db: &DatabaseConnection,
) -> Result<entity::shopping_list::Model, DbErr> {
    ShoppingListFactory::new(db).build().await
}
