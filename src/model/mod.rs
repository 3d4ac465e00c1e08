//! Data transfer objects exchanged over the HTTP API.
//!
//! Field names follow the wire format existing clients already consume: record
//! bookkeeping fields are capitalised (`ID`, `CreatedAt`, ...) while user supplied
//! fields are lower case.

pub mod api;
pub mod product;
pub mod shopping_list;
