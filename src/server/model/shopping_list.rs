//! Domain & parameter models for shopping list operations

use chrono::{DateTime, Utc};

use crate::{
    model::shopping_list::{CreateShoppingListDto, ShoppingListDto},
    server::{
        error::AppError,
        model::{missing_fields, product::Product},
    },
};

/// The shopping list domain model
///
/// `products` is only populated by the eager loading fetch; other reads leave it empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub products: Vec<Product>,
}

impl ShoppingList {
    /// Converts an entity model to the shopping list domain model without products
    pub fn from_entity(entity: entity::shopping_list::Model) -> Self {
        Self::from_entity_with_products(entity, Vec::new())
    }

    /// Converts an entity model and its loaded products to the domain model
    pub fn from_entity_with_products(
        entity: entity::shopping_list::Model,
        products: Vec<Product>,
    ) -> Self {
        Self {
            id: entity.id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
            name: entity.name,
            description: entity.description,
            products,
        }
    }

    /// Converts the shopping list domain model into its DTO
    pub fn into_dto(self) -> ShoppingListDto {
        ShoppingListDto {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
            name: self.name,
            description: self.description,
            products: self.products.into_iter().map(Product::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new shopping list
#[derive(Debug, Clone)]
pub struct CreateShoppingListParam {
    pub name: String,
    pub description: String,
}

impl CreateShoppingListParam {
    /// Validates the request body of a shopping list creation
    ///
    /// # Returns
    /// - `Ok(CreateShoppingListParam)` - Name and description present
    /// - `Err(AppError::InvalidParameter)` - Names of the missing fields
    pub fn from_dto(dto: CreateShoppingListDto) -> Result<Self, AppError> {
        let missing = missing_fields(&[
            ("name", !dto.name.is_empty()),
            ("description", !dto.description.is_empty()),
        ]);

        if !missing.is_empty() {
            return Err(AppError::InvalidParameter(missing));
        }

        Ok(Self {
            name: dto.name,
            description: dto.description,
        })
    }
}

/// Field values written by a shopping list update
#[derive(Debug, Clone)]
pub struct UpdateShoppingListParam {
    pub name: String,
    pub description: String,
}

/// Fields supplied by the caller of a shopping list update
#[derive(Debug, Clone, Default)]
pub struct PatchShoppingListParam {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl PatchShoppingListParam {
    /// Overlays the supplied fields onto an existing shopping list
    pub fn apply(self, existing: ShoppingList) -> UpdateShoppingListParam {
        UpdateShoppingListParam {
            name: self.name.unwrap_or(existing.name),
            description: self.description.unwrap_or(existing.description),
        }
    }
}
