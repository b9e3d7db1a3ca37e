//! Field-level checks shared by the `from_dto` conversions.
//!
//! Each helper returns `AppError::BadRequest` naming the offending field in its
//! camelCase wire form so the message matches what the client sent.

use crate::server::error::AppError;

/// Requires a string field to contain at least one non-whitespace character.
///
/// # Arguments
/// - `field` - Wire name of the field, used in the error message
/// - `value` - Field value
///
/// # Returns
/// - `Ok(String)` - The value, unchanged
/// - `Err(AppError::BadRequest)` - Value is empty or whitespace only
pub fn require_non_blank(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(value)
}

/// Rejects an optional string field that is present but blank.
///
/// Used by partial updates where absence means "leave unchanged".
///
/// # Returns
/// - `Ok(Option<String>)` - The value, unchanged
/// - `Err(AppError::BadRequest)` - Value is present but empty or whitespace only
pub fn reject_blank(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(AppError::BadRequest(format!("{} must not be blank", field)))
        }
        other => Ok(other),
    }
}

/// Treats an empty or whitespace-only identifier as absent.
pub fn non_blank_id(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
