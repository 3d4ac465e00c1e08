use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParam, PatchProductParam, Product},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new product
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, AppError> {
        let product = ProductRepository::new(self.db).create(param).await?;

        tracing::debug!("Created product {}", product.id);

        Ok(product)
    }

    /// Gets the product with the given id, or all products when `id` is `0`
    pub async fn get(&self, id: i32) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get(id).await?)
    }

    /// Overlays the supplied fields onto the stored product and writes it back
    ///
    /// Returns None if the product doesn't exist
    pub async fn update(
        &self,
        id: i32,
        patch: PatchProductParam,
    ) -> Result<Option<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(existing) = repo.get(id).await?.into_iter().next() else {
            return Ok(None);
        };

        let product = repo.update(existing.id, patch.apply(existing)).await?;

        Ok(Some(product))
    }

    /// Soft deletes a product
    ///
    /// Returns false if the product doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.get(id).await?.is_empty() {
            return Ok(false);
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted product {}", id);

        Ok(true)
    }
}
