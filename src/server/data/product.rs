//! Product data repository for database operations
//!
//! Provides the `ProductRepository` for creating, reading, updating and soft deleting
//! products as well as the conversion of entity models into domain models.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{CreateProductParam, Product, UpdateProductParam};

/// Repository providing database operations for products.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new product
    ///
    /// A name already used by another product, deleted or not, violates the unique
    /// constraint and is returned as the store error.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, DbErr> {
        let now = Utc::now();

        let product = entity::product::ActiveModel {
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            image: ActiveValue::Set(param.image),
            price: ActiveValue::Set(param.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(product))
    }

    /// Gets the product with the given id, or every product when `id` is `0`
    ///
    /// Soft deleted products are never returned. A missing product yields an
    /// empty vector.
    ///
    /// # Returns
    /// - `Ok(Vec<Product>)` - Matching products ordered by id
    /// - `Err(DbErr)` - Database error during select
    pub async fn get(&self, id: i32) -> Result<Vec<Product>, DbErr> {
        let mut query = entity::prelude::Product::find()
            .filter(entity::product::Column::DeletedAt.is_null())
            .order_by_asc(entity::product::Column::Id);

        if id != 0 {
            query = query.filter(entity::product::Column::Id.eq(id));
        }

        let products = query.all(self.db).await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    /// Overwrites the fields of the product with the given id
    ///
    /// # Returns
    /// - `Ok(Product)` - The product as written
    /// - `Err(DbErr::RecordNotFound)` - No live product has this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateProductParam) -> Result<Product, DbErr> {
        let product = entity::prelude::Product::find_by_id(id)
            .filter(entity::product::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Product with id {} not found",
                id
            )))?;

        let mut active_model: entity::product::ActiveModel = product.into();
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.image = ActiveValue::Set(param.image);
        active_model.price = ActiveValue::Set(param.price);

        let product = active_model.update(self.db).await?;

        Ok(Product::from_entity(product))
    }

    /// Soft deletes the product with the given id
    ///
    /// Join rows referencing the product are left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - Always, whether or not a row was affected
    /// - `Err(DbErr)` - Database error during update
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Product::update_many()
            .col_expr(entity::product::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(true)
    }
}
