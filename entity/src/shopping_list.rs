use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shopping_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
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

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::shopping_list_product::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::shopping_list_product::Relation::ShoppingList.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
