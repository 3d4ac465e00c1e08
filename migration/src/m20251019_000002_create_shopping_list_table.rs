use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingList::Table)
                    .if_not_exists()
                    .col(pk_auto(ShoppingList::Id))
                    .col(timestamp_with_time_zone(ShoppingList::CreatedAt))
                    .col(timestamp_with_time_zone(ShoppingList::UpdatedAt))
                    .col(timestamp_with_time_zone_null(ShoppingList::DeletedAt))
                    .col(string_uniq(ShoppingList::Name))
                    .col(text(ShoppingList::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shopping_lists_deleted_at")
                    .table(ShoppingList::Table)
                    .col(ShoppingList::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShoppingList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShoppingList {
    #[sea_orm(iden = "shopping_lists")]
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    Name,
    Description,
}
