//! Domain & parameter models for product operations

use chrono::{DateTime, Utc};

use crate::{
    model::product::{CreateProductDto, ProductDto},
    server::{error::AppError, model::missing_fields},
};

/// The product domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: i64,
}

impl Product {
    /// Converts an entity model to the product domain model
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
            name: entity.name,
            description: entity.description,
            image: entity.image,
            price: entity.price,
        }
    }

    /// Converts the product domain model into its DTO
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
            name: self.name,
            description: self.description,
            image: self.image,
            price: self.price,
        }
    }
}

/// Parameters for creating a new product
///
/// Only constructed through `from_dto`, which guarantees every field is present.
#[derive(Debug, Clone)]
pub struct CreateProductParam {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: i64,
}

impl CreateProductParam {
    /// Validates the request body of a product creation
    ///
    /// Every field is required. Strings must be non-empty and the price must be
    /// non-zero, zero being the value of an omitted price.
    ///
    /// # Returns
    /// - `Ok(CreateProductParam)` - All fields present
    /// - `Err(AppError::InvalidParameter)` - Names of the missing fields
    pub fn from_dto(dto: CreateProductDto) -> Result<Self, AppError> {
        let missing = missing_fields(&[
            ("name", !dto.name.is_empty()),
            ("description", !dto.description.is_empty()),
            ("image", !dto.image.is_empty()),
            ("price", dto.price != 0),
        ]);

        if !missing.is_empty() {
            return Err(AppError::InvalidParameter(missing));
        }

        Ok(Self {
            name: dto.name,
            description: dto.description,
            image: dto.image,
            price: dto.price,
        })
    }
}

/// Field values written by a product update
///
/// Holds the complete set of mutable fields, the result of overlaying a
/// `PatchProductParam` onto the stored record.
#[derive(Debug, Clone)]
pub struct UpdateProductParam {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: i64,
}

/// Fields supplied by the caller of a product update, `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct PatchProductParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
}

impl PatchProductParam {
    /// Overlays the supplied fields onto an existing product
    pub fn apply(self, existing: Product) -> UpdateProductParam {
        UpdateProductParam {
            name: self.name.unwrap_or(existing.name),
            description: self.description.unwrap_or(existing.description),
            image: existing.image,
            price: self.price.unwrap_or(existing.price),
        }
    }
}
