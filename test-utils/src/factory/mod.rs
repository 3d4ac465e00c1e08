//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Default names are
//! made unique with a shared counter so several records can coexist under the unique
//! name constraints.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let product = factory::create_product(&db).await?;
//! let list = factory::create_shopping_list(&db).await?;
//! factory::attach_product(&db, list.id, product.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db)
//!     .name("Apple")
//!     .price(10)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod product;
pub mod shopping_list;

pub use helpers::{attach_product, create_list_with_products};
pub use product::create_product;
pub use shopping_list::create_shopping_list;
