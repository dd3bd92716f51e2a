use crate::server::error::validation::ValidationError;

/// Parses a path identifier into a positive `i32`.
///
/// # Arguments
/// - `value` - Raw path segment as received from the router
///
/// # Returns
/// - `Ok(i32)` - Identifier greater than zero
/// - `Err(ValidationError::EmptyId)` - `value` is empty
/// - `Err(ValidationError::InvalidId)` - `value` is not an `i32`
/// - `Err(ValidationError::NonPositiveId)` - `value` is zero or negative
pub fn parse_id(value: &str) -> Result<i32, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyId);
    }

    let id = value
        .parse::<i32>()
        .map_err(|e| ValidationError::InvalidId {
            value: value.to_string(),
            source: e,
        })?;

    if id <= 0 {
        return Err(ValidationError::NonPositiveId(id));
    }

    Ok(id)
}

/// Rejects text fields that are empty or only whitespace.
///
/// The value itself is not modified.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(())
}
