pub use super::product::Entity as Product;
pub use super::shopping_list::Entity as ShoppingList;
pub use super::shopping_list_product::Entity as ShoppingListProduct;
