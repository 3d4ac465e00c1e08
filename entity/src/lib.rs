//! SeaORM entity definitions for the shopping list database.
//!
//! One module per table. `prelude` re-exports the `Entity` types under their table
//! names for concise use in repositories and tests.

pub mod prelude;

pub mod product;
pub mod shopping_list;
pub mod shopping_list_product;
