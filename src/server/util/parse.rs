use crate::server::error::AppError;

/// Parses an id taken from a path segment.
///
/// Ids are positive; a non-numeric, negative or zero value is rejected.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Some(i32)` - A usable id
/// - `None` - The value is not a valid id
pub fn parse_id(value: &str) -> Option<i32> {
    value.parse::<i32>().ok().filter(|id| *id > 0)
}

/// Parses the optional `id` query parameter of the list endpoints.
///
/// An absent, empty or non-numeric parameter selects every record and yields `0`, as
/// does an explicit `0`. Any other number is looked up as given, so a negative id
/// simply matches nothing.
pub fn parse_query_id(value: Option<&str>) -> i32 {
    value.and_then(|raw| raw.parse::<i32>().ok()).unwrap_or(0)
}

/// Returns the value of an optional query parameter, treating an empty value as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses an optional numeric query parameter.
///
/// # Arguments
/// - `field` - Parameter name reported when the value is malformed
/// - `value` - Raw parameter value, empty treated as absent
///
/// # Returns
/// - `Ok(None)` - Parameter absent or empty
/// - `Ok(Some(i64))` - Parsed value
/// - `Err(AppError::InvalidParameter)` - Value is not an integer
pub fn parse_optional_i64(field: &str, value: Option<String>) -> Result<Option<i64>, AppError> {
    non_empty(value)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| AppError::InvalidParameter(vec![field.to_string()]))
        })
        .transpose()
}
