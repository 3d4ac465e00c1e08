//! Service layer orchestrating repositories for each controller.
//!
//! Services hold the read-modify-write sequence of updates and the existence checks
//! preceding deletes. These sequences run without a transaction: two concurrent updates
//! of the same record race and the last write wins.

pub mod product;
pub mod shopping_list;
