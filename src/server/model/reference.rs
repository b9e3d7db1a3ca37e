//! Either/or references to a related entity.

use crate::server::{error::AppError, util::validate::non_blank_id};

/// A reference to a related entity that either already exists or must be created.
///
/// Request payloads carry this as two optional fields (e.g. `modelId` and `model`).
/// Once converted, exactly one branch is present, so "both" and "neither" cannot reach
/// the service layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<Id, Spec> {
    /// Link the entity with this identifier.
    Existing(Id),
    /// Create a new entity from this definition.
    New(Spec),
}

impl<Spec> Reference<String, Spec> {
    /// Builds a reference from the pair of optional request fields.
    ///
    /// A blank identifier counts as absent.
    ///
    /// # Arguments
    /// - `id_field` - Wire name of the identifier field, for error messages
    /// - `spec_field` - Wire name of the inline definition field
    /// - `id` - Identifier of an existing entity, if provided
    /// - `spec` - Already validated definition for a new entity, if provided
    ///
    /// # Returns
    /// - `Ok(Reference::Existing)` - Only the identifier was provided
    /// - `Ok(Reference::New)` - Only the definition was provided
    /// - `Err(AppError::BadRequest)` - Both or neither were provided
    pub fn from_parts(
        id_field: &str,
        spec_field: &str,
        id: Option<String>,
        spec: Option<Spec>,
    ) -> Result<Self, AppError> {
        match (non_blank_id(id), spec) {
            (Some(id), None) => Ok(Reference::Existing(id)),
            (None, Some(spec)) => Ok(Reference::New(spec)),
            (Some(_), Some(_)) => Err(AppError::BadRequest(format!(
                "Provide either {} or {}, not both",
                id_field, spec_field
            ))),
            (None, None) => Err(AppError::BadRequest(format!(
                "Either {} or {} is required",
                id_field, spec_field
            ))),
        }
    }
}
