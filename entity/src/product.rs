use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Soft delete marker, rows with a value are excluded from reads
    pub deleted_at: Option<DateTimeUtc>,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    /// Base64 encoded image, stored as is
    pub image: String,
    #[sea_orm(default_value = 0)]
    pub price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shopping_list_product::Entity")]
    ShoppingListProduct,
}

impl Related<super::shopping_list_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingListProduct.def()
    }
}

impl Related<super::shopping_list::Entity> for Entity {
    fn to() -> RelationDef {
        super::shopping_list_product::Relation::ShoppingList.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::shopping_list_product::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
