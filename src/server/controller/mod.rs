//! HTTP request handlers.
//!
//! Controllers decode path, query and body input, validate it, call the service layer
//! and wrap the outcome in a `ResponseDto` envelope built for the request.

pub mod param;
pub mod product;
pub mod shopping_list;

#[cfg(test)]
mod test;
