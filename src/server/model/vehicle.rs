//! Vehicle domain models and parameters.

use crate::{
    model::vehicle::{CreateVehicleDto, CreateVehicleModelDto, VehicleDto, VehicleModelDto},
    server::{
        error::AppError,
        model::reference::Reference,
        service::link::{LinkBuilder, VEHICLES},
        util::validate::require_non_blank,
    },
};

/// Model years at or before this are rejected.
const MIN_MODEL_YEAR: i32 = 1900;

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleModel {
    pub id: String,
    pub name: String,
    pub year: i32,
}

impl VehicleModel {
    pub fn from_entity(entity: entity::vehicle_model::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
        }
    }

    pub fn into_dto(self) -> VehicleModelDto {
        VehicleModelDto {
            id: self.id,
            name: self.name,
            year: self.year,
        }
    }
}

/// Vehicle with its model.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub plate: String,
    pub user_id: String,
    pub model: VehicleModel,
}

impl Vehicle {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `vehicle` - Vehicle entity
    /// - `model` - Vehicle model entity referenced by `vehicle.model_id`
    ///
    /// # Returns
    /// - `Vehicle` - Domain model with the model embedded
    pub fn from_entity(
        vehicle: entity::vehicle::Model,
        model: entity::vehicle_model::Model,
    ) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate,
            user_id: vehicle.user_id,
            model: VehicleModel::from_entity(model),
        }
    }

    /// Converts domain model to DTO for API responses, attaching vehicle resource links.
    pub fn into_dto(self, links: &LinkBuilder) -> VehicleDto {
        VehicleDto {
            links: links.resource_links(VEHICLES, &self.id),
            id: self.id,
            plate: self.plate,
            user_id: self.user_id,
            model: self.model.into_dto(),
        }
    }
}

/// Validated fields for a new vehicle model.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVehicleModelParams {
    pub name: String,
    pub year: i32,
}

impl CreateVehicleModelParams {
    /// Converts and validates an inline model definition.
    ///
    /// # Returns
    /// - `Ok(CreateVehicleModelParams)` - Name is non-blank and year is after 1900
    /// - `Err(AppError::BadRequest)` - Validation failed
    pub fn from_dto(dto: CreateVehicleModelDto) -> Result<Self, AppError> {
        let name = require_non_blank("model.name", dto.name)?;

        if dto.year <= MIN_MODEL_YEAR {
            return Err(AppError::BadRequest(format!(
                "model.year must be greater than {}",
                MIN_MODEL_YEAR
            )));
        }

        Ok(Self {
            name,
            year: dto.year,
        })
    }
}

/// Parameters for creating a vehicle linked to an existing model or a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVehicleParams {
    pub plate: String,
    pub user_id: String,
    pub model: Reference<String, CreateVehicleModelParams>,
}

impl CreateVehicleParams {
    /// Converts and validates the creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateVehicleParams)` - Fields are valid and exactly one model reference is set
    /// - `Err(AppError::BadRequest)` - A field is blank, or both/neither of `modelId` and
    ///   `model` are provided, or the inline model is invalid
    pub fn from_dto(dto: CreateVehicleDto) -> Result<Self, AppError> {
        let plate = require_non_blank("plate", dto.plate)?;
        let user_id = require_non_blank("userId", dto.user_id)?;
        let spec = dto.model.map(CreateVehicleModelParams::from_dto).transpose()?;

        Ok(Self {
            plate,
            user_id,
            model: Reference::from_parts("modelId", "model", dto.model_id, spec)?,
        })
    }
}
