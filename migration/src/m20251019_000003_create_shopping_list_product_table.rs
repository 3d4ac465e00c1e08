use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251019_000001_create_product_table::Product,
    m20251019_000002_create_shopping_list_table::ShoppingList,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Soft deletes never remove the parent rows, so the foreign keys carry no
        // ON DELETE action and join rows outlive a deleted list or product.
        manager
            .create_table(
                Table::create()
                    .table(ShoppingListProduct::Table)
                    .if_not_exists()
                    .col(integer(ShoppingListProduct::ShoppingListId))
                    .col(integer(ShoppingListProduct::ProductId))
                    .primary_key(
                        Index::create()
                            .col(ShoppingListProduct::ShoppingListId)
                            .col(ShoppingListProduct::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopping_list_products_shopping_list_id")
                            .from(
                                ShoppingListProduct::Table,
                                ShoppingListProduct::ShoppingListId,
                            )
                            .to(ShoppingList::Table, ShoppingList::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopping_list_products_product_id")
                            .from(ShoppingListProduct::Table, ShoppingListProduct::ProductId)
                            .to(Product::Table, Product::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShoppingListProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShoppingListProduct {
    #[sea_orm(iden = "shopping_list_products")]
    Table,
    ShoppingListId,
    ProductId,
}
