//! Database repository layer for the shopping list domain.
//!
//! Repositories borrow the shared connection pool, use SeaORM entity models internally
//! and return domain models. Deletes are soft deletes: they stamp `deleted_at`, and
//! every read filters stamped rows out.

pub mod product;
pub mod shopping_list;
