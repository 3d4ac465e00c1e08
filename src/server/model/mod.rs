//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the validated
//! input of an operation from the controller down to the repository.

pub mod product;
pub mod shopping_list;

/// Collects the names of required fields that are empty.
pub(crate) fn missing_fields(fields: &[(&str, bool)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name.to_string())
        .collect()
}
