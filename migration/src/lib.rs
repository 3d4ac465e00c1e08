pub use sea_orm_migration::prelude::*;

mod m20251019_000001_create_product_table;
mod m20251019_000002_create_shopping_list_table;
mod m20251019_000003_create_shopping_list_product_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_product_table::Migration),
            Box::new(m20251019_000002_create_shopping_list_table::Migration),
            Box::new(m20251019_000003_create_shopping_list_product_table::Migration),
        ]
    }
}
